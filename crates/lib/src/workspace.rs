//! # Workspace Abstraction
//!
//! The interface to the document-workspace platform that pages are read from
//! and written to. The real client lives in the `lexibridge-notion` crate;
//! this module only defines the trait, the generic error type, and the
//! pass-through page data model so the server can hold a swappable
//! `Arc<dyn Workspace>`.

use crate::types::Translation;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors surfaced by a workspace client.
#[derive(Error, Debug, Clone)]
pub enum WorkspaceError {
    #[error("Failed to reach the workspace API: {0}")]
    Fetch(String),
    #[error("Workspace API returned status code {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Page {0} is archived and must be unarchived before updating")]
    Archived(String),
    #[error("Invalid workspace credentials: {0}")]
    Credentials(String),
}

/// The content of a workspace page.
///
/// Properties and blocks mirror the platform's own JSON verbatim; this crate
/// never transforms them structurally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    pub properties: Map<String, Value>,
    pub blocks: Vec<Value>,
}

/// A content update to apply to a page: new property values and/or patches
/// for individual blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockPatch>,
}

/// A patch for a single typed content block, addressed by its platform id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockPatch {
    pub id: String,
    pub content: Value,
}

/// A trait for reading and updating pages in the document workspace.
///
/// Implementations issue one call or a short fixed sequence of calls to the
/// platform's REST API per operation; failures are logged and propagated
/// unchanged.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Retrieves a page's properties and its ordered content blocks.
    async fn get_page_content(&self, page_id: &str) -> Result<PageContent, WorkspaceError>;

    /// Applies a content update: property values first, then each block patch.
    async fn update_page_content(
        &self,
        page_id: &str,
        update: &PageUpdate,
    ) -> Result<(), WorkspaceError>;

    /// Writes a word's translations into the page's translation properties.
    ///
    /// Re-fetches the page first and fails with [`WorkspaceError::Archived`]
    /// before any write when the page is archived.
    async fn update_translations(
        &self,
        page_id: &str,
        translation: &Translation,
    ) -> Result<(), WorkspaceError>;
}
