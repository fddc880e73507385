use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use super::paginate::{CursorPage, Page};
use super::types::{Automation, Campaign, ErrorBody, Form, FormType, Group, ListResponse, Subscriber};

pub const DEFAULT_BASE_URL: &str = "https://connect.mailerlite.com/api";

/// Per-request timeout applied by the HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors returned by the API client.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client misconfigured (missing token, unusable base URL).
    Config(String),
    /// Transport-level failure (DNS, connection refused, TLS).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The whole operation exceeded its deadline.
    Timeout(Duration),
}

impl ApiError {
    /// Builds an `Api` error from a status code and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Api { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
            ApiError::Timeout(after) => write!(f, "request timed out after {}s", after.as_secs()),
        }
    }
}

impl std::error::Error for ApiError {}

/// One call per page for every resource the dashboard lists.
#[async_trait]
pub trait MailerLiteApi: Send + Sync {
    async fn list_subscribers(
        &self,
        cursor: &str,
        limit: usize,
    ) -> Result<CursorPage<Subscriber>, ApiError>;

    async fn list_campaigns(&self, page: u32, limit: usize) -> Result<Page<Campaign>, ApiError>;

    async fn list_automations(&self, page: u32, limit: usize)
    -> Result<Page<Automation>, ApiError>;

    async fn list_groups(&self, page: u32, limit: usize) -> Result<Page<Group>, ApiError>;

    async fn list_forms(
        &self,
        form_type: FormType,
        page: u32,
        limit: usize,
    ) -> Result<Page<Form>, ApiError>;
}

/// reqwest-backed client for `connect.mailerlite.com`.
pub struct MailerLiteClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl MailerLiteClient {
    pub fn new(token: String, base_url: Option<String>) -> Result<Self, ApiError> {
        if token.trim().is_empty() {
            return Err(ApiError::Config("API token is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("mailerdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ListResponse<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("GET {} failed with {}", url, status);
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        response
            .json::<ListResponse<T>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        limit: usize,
    ) -> Result<Page<T>, ApiError> {
        let resp = self
            .get_list::<T>(path, &[("page", page.to_string()), ("limit", limit.to_string())])
            .await?;
        Ok(Page {
            items: resp.data,
            has_next: resp.links.next.is_some_and(|n| !n.is_empty()),
        })
    }
}

#[async_trait]
impl MailerLiteApi for MailerLiteClient {
    async fn list_subscribers(
        &self,
        cursor: &str,
        limit: usize,
    ) -> Result<CursorPage<Subscriber>, ApiError> {
        let mut query = vec![("limit", limit.to_string())];
        if !cursor.is_empty() {
            query.push(("cursor", cursor.to_string()));
        }
        let resp = self.get_list::<Subscriber>("/subscribers", &query).await?;
        Ok(CursorPage {
            items: resp.data,
            next_cursor: resp.meta.next_cursor.unwrap_or_default(),
        })
    }

    async fn list_campaigns(&self, page: u32, limit: usize) -> Result<Page<Campaign>, ApiError> {
        self.get_page("/campaigns", page, limit).await
    }

    async fn list_automations(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Page<Automation>, ApiError> {
        self.get_page("/automations", page, limit).await
    }

    async fn list_groups(&self, page: u32, limit: usize) -> Result<Page<Group>, ApiError> {
        self.get_page("/groups", page, limit).await
    }

    async fn list_forms(
        &self,
        form_type: FormType,
        page: u32,
        limit: usize,
    ) -> Result<Page<Form>, ApiError> {
        let path = format!("/forms/{}", form_type.api_value());
        self.get_page(&path, page, limit).await
    }
}
