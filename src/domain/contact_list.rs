use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend identifier of a contact list. Opaque to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub u64);

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ListId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ListId)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total_contacts: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContactList {
    /// Label used by selection controls, e.g. `Newsletter (120 contacts)`
    pub fn display_label(&self) -> String {
        format!("{} ({} contacts)", self.name, self.total_contacts)
    }
}

/// Page envelope used by every list endpoint of the API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_paginated_lists() {
        let body = r#"{
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 7,
                "name": "Newsletter",
                "description": "",
                "total_contacts": 120,
                "created_at": "2024-03-01T10:00:00.000000-03:00",
                "updated_at": "2024-03-02T10:00:00Z"
            }]
        }"#;

        let page: Paginated<ContactList> = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, ListId(7));
        assert_eq!(page.results[0].display_label(), "Newsletter (120 contacts)");
    }

    #[test]
    fn test_list_id_from_str() {
        assert_eq!(" 42 ".parse::<ListId>().unwrap(), ListId(42));
        assert!("abc".parse::<ListId>().is_err());
    }
}
