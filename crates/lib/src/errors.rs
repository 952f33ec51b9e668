use thiserror::Error;

/// Custom error types for the translation client.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Request to AI provider failed: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned status code {status}: {body}")]
    AiApi { status: u16, body: String },
    #[error("Translation response missing required `{0}` label")]
    Incomplete(&'static str),
}
