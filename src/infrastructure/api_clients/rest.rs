use super::{ContactImporter, ContactListDirectory};
use crate::domain::api_config::ApiConfig;
use crate::domain::bulk_import::{BulkImportReceipt, BulkImportRequest};
use crate::domain::contact_list::{ContactList, ListId, Paginated};
use crate::domain::csv::ParsedContact;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::response::extract_api_error;
use async_trait::async_trait;
use std::time::Duration;

const CONTACT_LISTS_PATH: &str = "contact-lists/";
const BULK_UPLOAD_PATH: &str = "contacts/bulk_upload/";

/// Upper bound on followed `next` links, in case the API loops
const MAX_LIST_PAGES: usize = 50;

pub struct RestApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RestApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-success response to an error, keeping the server's message
    async fn failure(response: reqwest::Response) -> AppError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        match extract_api_error(&text) {
            Some(message) => AppError::ApiError(message),
            None => AppError::Transport(format!("API responded with {}", status)),
        }
    }

    async fn fetch_list_page(&self, url: &str, first: bool) -> Result<Paginated<ContactList>> {
        let mut request = self.client.get(url);
        if first {
            request = request.query(&[("page", 1u32), ("page_size", self.config.list_page_size)]);
        }

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse contact lists: {}", e)))
    }
}

#[async_trait]
impl ContactListDirectory for RestApiClient {
    async fn list_all(&self) -> Result<Vec<ContactList>> {
        let mut url = self.config.endpoint(CONTACT_LISTS_PATH);
        let mut lists = Vec::new();

        for page_index in 0..MAX_LIST_PAGES {
            let page = self.fetch_list_page(&url, page_index == 0).await?;
            lists.extend(page.results);

            match page.next {
                Some(next) if (lists.len() as u64) < page.count => url = next,
                _ => break,
            }
        }

        tracing::debug!("Fetched {} contact lists", lists.len());
        Ok(lists)
    }
}

#[async_trait]
impl ContactImporter for RestApiClient {
    async fn bulk_upload(
        &self,
        list_id: ListId,
        contacts: &[ParsedContact],
    ) -> Result<BulkImportReceipt> {
        let url = self.config.endpoint(BULK_UPLOAD_PATH);
        let body = BulkImportRequest { list_id, contacts };

        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse import receipt: {}", e)))
    }
}
