//! # Word Translation Core
//!
//! This crate provides a client to translate a vocabulary word using a
//! configurable AI provider and the shared data model for writing the result
//! back into a document workspace.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod types;
pub mod workspace;

pub use errors::TranslateError;
pub use types::{Translation, Translator};

use tracing::{debug, info, warn};

impl Translator {
    /// Translates a single word and returns its Chinese translation, a short
    /// English explanation, and (when the model provides one) a phonetic
    /// transcription.
    ///
    /// The prompt instructs the model to answer with newline-delimited
    /// `Label: value` lines; the response is parsed by [`Translation::parse`].
    /// A response missing the `Chinese:` or `English:` label fails with
    /// [`TranslateError::Incomplete`]; a missing `Phonetic:` label is only
    /// logged.
    pub async fn translate_word(&self, word: &str) -> Result<Translation, TranslateError> {
        let user_prompt = prompts::TRANSLATION_USER_PROMPT.replace("{word}", word);
        debug!(%word, "requesting translation from AI provider");

        let response_text = self
            .ai_provider
            .generate(prompts::TRANSLATION_SYSTEM_PROMPT, &user_prompt)
            .await?;

        let translation = Translation::parse(&response_text)?;
        if translation.phonetic.is_none() {
            warn!(%word, "translation response did not include a phonetic transcription");
        }

        info!(%word, ?translation, "received translation");
        Ok(translation)
    }
}
