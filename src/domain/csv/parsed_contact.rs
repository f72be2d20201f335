// ============================================================
// PARSED CONTACT
// ============================================================
// A validated row, ready to be previewed or submitted

use serde::{Deserialize, Serialize};

use super::{ColumnHeader, ExtraFields};

/// A contact accepted by the row validator.
///
/// Canonical attributes have their own typed slots; every other column lands
/// in `extra` and is serialized flat next to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContact {
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ParsedContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Store a value in the slot the header points at.
    /// A later column with the same slot overwrites an earlier one.
    pub fn assign(&mut self, header: &ColumnHeader, value: String) {
        match header {
            ColumnHeader::Email => self.email = value,
            ColumnHeader::FirstName => self.first_name = Some(value),
            ColumnHeader::LastName => self.last_name = Some(value),
            ColumnHeader::Custom(key) => {
                self.extra.insert(key.clone(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_routes_values_by_header() {
        let mut contact = ParsedContact::default();
        contact.assign(&ColumnHeader::Email, "a@b.com".to_string());
        contact.assign(&ColumnHeader::FirstName, "Ana".to_string());
        contact.assign(&ColumnHeader::Custom("phone".to_string()), "123".to_string());

        assert_eq!(
            contact,
            ParsedContact::new("a@b.com")
                .with_first_name("Ana")
                .with_extra("phone", "123")
        );
    }

    #[test]
    fn test_serializes_extras_flat() {
        let contact = ParsedContact::new("a@b.com")
            .with_last_name("Silva")
            .with_extra("city", "Recife");

        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "a@b.com",
                "last_name": "Silva",
                "city": "Recife"
            })
        );
    }
}
