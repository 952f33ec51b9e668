//! # `lexibridge-notion`: Notion Workspace Client
//!
//! This crate wraps the Notion REST API as the real implementation of the
//! [`Workspace`] trait from the core `lexibridge` library. Each operation is
//! a single API call or a short fixed sequence of them; there are no retries
//! and no partial rollback.

use async_trait::async_trait;
use lexibridge::workspace::{PageContent, PageUpdate, Workspace, WorkspaceError};
use lexibridge::Translation;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{error, info};

/// The default base URL of the Notion REST API.
pub const NOTION_API_URL: &str = "https://api.notion.com";

/// The Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// The page property that receives the Chinese translation.
pub const CHINESE_PROPERTY: &str = "Translation";

/// The page property that receives the English explanation.
pub const ENGLISH_PROPERTY: &str = "Translation En";

// --- Error Definitions ---

#[derive(Error, Debug, Clone)]
pub enum NotionError {
    #[error("Failed to fetch from Notion API: {0}")]
    Fetch(String),
    #[error("Notion API returned status code {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Page {0} is archived. Please unarchive it before updating.")]
    Archived(String),
    #[error("Invalid Notion token: {0}")]
    InvalidToken(String),
}

impl From<reqwest::Error> for NotionError {
    fn from(err: reqwest::Error) -> Self {
        NotionError::Fetch(err.to_string())
    }
}

/// A helper to convert the specific `NotionError` into the generic
/// `lexibridge::workspace::WorkspaceError`.
impl From<NotionError> for WorkspaceError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::Fetch(msg) => WorkspaceError::Fetch(msg),
            NotionError::Api { status, body } => WorkspaceError::Api { status, body },
            NotionError::Archived(page_id) => WorkspaceError::Archived(page_id),
            NotionError::InvalidToken(msg) => WorkspaceError::Credentials(msg),
        }
    }
}

// --- Notion API Response Structures ---

#[derive(Deserialize, Debug)]
struct Page {
    id: String,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    properties: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
struct BlockList {
    results: Vec<Value>,
    next_cursor: Option<String>,
    has_more: bool,
}

// --- Client ---

/// A client for the Notion REST API.
pub struct NotionClient {
    client: reqwest::Client,
    headers: HeaderMap,
    base_url: String,
}

impl NotionClient {
    /// Creates a new `NotionClient` authenticated with the given integration
    /// token, pointed at the production API.
    pub fn new(token: &str) -> Result<Self, NotionError> {
        Self::with_base_url(token, NOTION_API_URL)
    }

    /// Creates a client against a custom base URL. Tests point this at a mock
    /// server.
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self, NotionError> {
        Ok(Self {
            client: reqwest::Client::new(),
            headers: construct_headers(token)?,
            base_url: base_url.into(),
        })
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let url = format!("{}/v1/pages/{page_id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Page>().await?)
    }

    /// Lists a page's content blocks, following cursor pagination until the
    /// API reports no further results.
    async fn list_block_children(&self, block_id: &str) -> Result<Vec<Value>, NotionError> {
        let mut all_blocks = Vec::new();
        let mut next_cursor: Option<String> = None;
        let url = format!("{}/v1/blocks/{block_id}/children", self.base_url);

        loop {
            let mut request = self.client.get(&url).headers(self.headers.clone());
            if let Some(cursor) = &next_cursor {
                request = request.query(&[("start_cursor", cursor)]);
            }
            let response = check_status(request.send().await?).await?;
            let mut list = response.json::<BlockList>().await?;
            all_blocks.append(&mut list.results);

            match (list.has_more, list.next_cursor) {
                (true, Some(cursor)) => next_cursor = Some(cursor),
                _ => break,
            }
        }

        Ok(all_blocks)
    }

    async fn update_page_properties(
        &self,
        page_id: &str,
        properties: &Value,
    ) -> Result<(), NotionError> {
        let url = format!("{}/v1/pages/{page_id}", self.base_url);
        let body = json!({ "properties": properties });
        let response = self
            .client
            .patch(&url)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn update_block(&self, block_id: &str, content: &Value) -> Result<(), NotionError> {
        let url = format!("{}/v1/blocks/{block_id}", self.base_url);
        let response = self
            .client
            .patch(&url)
            .headers(self.headers.clone())
            .json(content)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl Workspace for NotionClient {
    /// Retrieves a page's properties and its ordered content blocks, both
    /// mirrored verbatim from the API.
    async fn get_page_content(&self, page_id: &str) -> Result<PageContent, WorkspaceError> {
        let page = self.retrieve_page(page_id).await.map_err(|e| {
            error!(%page_id, "Error getting page content: {e}");
            e
        })?;
        let blocks = self.list_block_children(page_id).await.map_err(|e| {
            error!(%page_id, "Error listing page blocks: {e}");
            e
        })?;

        Ok(PageContent {
            properties: page.properties,
            blocks,
        })
    }

    /// Applies property values first, then patches each listed block.
    async fn update_page_content(
        &self,
        page_id: &str,
        update: &PageUpdate,
    ) -> Result<(), WorkspaceError> {
        if let Some(properties) = &update.properties {
            self.update_page_properties(page_id, &Value::Object(properties.clone()))
                .await
                .map_err(|e| {
                    error!(%page_id, "Error updating page properties: {e}");
                    e
                })?;
        }

        for block in &update.blocks {
            self.update_block(&block.id, &block.content)
                .await
                .map_err(|e| {
                    error!(%page_id, block_id = %block.id, "Error updating block: {e}");
                    e
                })?;
        }

        info!(%page_id, "Successfully updated page content");
        Ok(())
    }

    /// Writes the translation properties after confirming the page exists and
    /// is not archived. An archived page fails before any write occurs.
    async fn update_translations(
        &self,
        page_id: &str,
        translation: &Translation,
    ) -> Result<(), WorkspaceError> {
        info!(%page_id, ?translation, "Attempting to update page translations");

        let page = self.retrieve_page(page_id).await.map_err(|e| {
            error!(%page_id, "Failed to retrieve page before update: {e}");
            e
        })?;

        if page.archived {
            error!(%page_id, "Page is archived, refusing to update");
            return Err(NotionError::Archived(page.id).into());
        }

        let properties = translation_properties(translation);
        self.update_page_properties(page_id, &properties)
            .await
            .map_err(|e| {
                error!(%page_id, "Error updating translations: {e}");
                e
            })?;

        info!(%page_id, "Successfully updated translations");
        Ok(())
    }
}

// --- Helper Functions ---

fn construct_headers(token: &str) -> Result<HeaderMap, NotionError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| NotionError::InvalidToken(e.to_string()))?,
    );
    headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, NotionError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NotionError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Builds the rich-text property payload for a translation.
///
/// The payload is a pure function of the input, so repeating an update with
/// the same translation always writes the same property values.
pub fn translation_properties(translation: &Translation) -> Value {
    json!({
        (CHINESE_PROPERTY): {
            "rich_text": [{ "text": { "content": translation.chinese } }]
        },
        (ENGLISH_PROPERTY): {
            "rich_text": [{ "text": { "content": translation.english } }]
        },
    })
}
