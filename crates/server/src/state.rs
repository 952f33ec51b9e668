//! # Application State
//!
//! The shared application state and the logic for building it at startup.
//! Both outbound clients sit behind their interface types (`AiProvider`
//! inside the `Translator`, `Workspace` for the document platform) so tests
//! can swap in fakes or point the real clients at mock servers.

use crate::config::AppConfig;
use lexibridge::{providers::ai::deepseek::DeepSeekProvider, workspace::Workspace, Translator};
use lexibridge_notion::NotionClient;
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The translation client.
    pub translator: Arc<Translator>,
    /// The document-workspace client.
    pub workspace: Arc<dyn Workspace>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let ai_provider = DeepSeekProvider::new(
        config.deepseek_api_url.clone(),
        config.deepseek_api_key.clone(),
        None,
    )?;
    let translator = Translator::new(Box::new(ai_provider));

    let workspace = match &config.notion_api_url {
        Some(url) => NotionClient::with_base_url(&config.notion_token, url.clone())?,
        None => NotionClient::new(&config.notion_token)?,
    };

    Ok(AppState {
        config: Arc::new(config),
        translator: Arc::new(translator),
        workspace: Arc::new(workspace),
    })
}
