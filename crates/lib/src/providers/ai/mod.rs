pub mod deepseek;

use crate::errors::TranslateError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for generating chat completions from
/// different Large Language Models, so the real provider can be swapped for a
/// fake in tests.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result should be a string containing the AI's response.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, TranslateError>;
}

dyn_clone::clone_trait_object!(AiProvider);
