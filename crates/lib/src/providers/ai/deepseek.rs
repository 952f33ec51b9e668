use crate::{errors::TranslateError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

/// The default chat-completions endpoint for the DeepSeek API.
pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// The default model used for translation requests.
pub const DEEPSEEK_CHAT_MODEL: &str = "deepseek-chat";

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage>,
    model: &'a str,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- DeepSeek provider implementation ---

/// A provider for the DeepSeek (OpenAI-compatible) chat-completions API.
#[derive(Clone, Debug)]
pub struct DeepSeekProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl DeepSeekProvider {
    /// Creates a new `DeepSeekProvider`.
    ///
    /// `api_url` and `model` fall back to [`DEEPSEEK_API_URL`] and
    /// [`DEEPSEEK_CHAT_MODEL`] when not given; tests point `api_url` at a
    /// mock server.
    pub fn new(
        api_url: Option<String>,
        api_key: String,
        model: Option<String>,
    ) -> Result<Self, TranslateError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(TranslateError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url: api_url.unwrap_or_else(|| DEEPSEEK_API_URL.to_string()),
            api_key,
            model: model.unwrap_or_else(|| DEEPSEEK_CHAT_MODEL.to_string()),
        })
    }
}

#[async_trait]
impl AiProvider for DeepSeekProvider {
    /// Sends a single chat-completion request and returns the raw response text.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, TranslateError> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        let request_body = ChatRequest {
            messages,
            model: &self.model,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(TranslateError::AiRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::AiApi {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(TranslateError::AiDeserialization)?;

        Ok(chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default())
    }
}
