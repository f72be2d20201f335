use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the REST API, including the `/api` prefix
    pub base_url: String,
    /// Bearer token attached to every request. Obtaining it is someone else's job.
    pub access_token: Option<String>,
    /// Page size used when enumerating contact lists
    pub list_page_size: u32,
    /// No timeout unless set; the HTTP client defaults apply
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            access_token: None,
            list_page_size: 100,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("base_url is not a valid URL: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("base_url must be http or https, got {}", url.scheme()));
        }
        if self.list_page_size == 0 {
            return Err("list_page_size must be > 0".to_string());
        }
        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be > 0 when set".to_string());
        }
        Ok(())
    }

    /// Join an endpoint path onto the base URL, tolerating a trailing slash
    pub fn endpoint(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path.trim_start_matches('/'))
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }
}
