use crate::{errors::TranslateError, providers::ai::AiProvider};
use serde::{Deserialize, Serialize};

/// A parsed translation for a single word.
///
/// The Chinese translation and the English explanation are required because
/// both are written back to the workspace page; the phonetic transcription is
/// informational and may be absent from the model's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub chinese: String,
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
}

impl Translation {
    /// Parses a newline-delimited `Label: value` response.
    ///
    /// For each label only the first matching line wins. Missing `Chinese:`
    /// or `English:` labels fail with [`TranslateError::Incomplete`]; a
    /// missing `Phonetic:` label leaves the field `None`.
    pub fn parse(text: &str) -> Result<Self, TranslateError> {
        let mut chinese: Option<String> = None;
        let mut english: Option<String> = None;
        let mut phonetic: Option<String> = None;

        for line in text.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("Chinese:") {
                chinese.get_or_insert_with(|| rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix("English:") {
                english.get_or_insert_with(|| rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix("Phonetic:") {
                phonetic.get_or_insert_with(|| rest.trim().to_string());
            }
        }

        Ok(Self {
            chinese: chinese.ok_or(TranslateError::Incomplete("Chinese"))?,
            english: english.ok_or(TranslateError::Incomplete("English"))?,
            phonetic,
        })
    }
}

/// A client that translates words through a configurable AI provider.
pub struct Translator {
    pub ai_provider: Box<dyn AiProvider>,
}

impl Translator {
    /// Creates a new `Translator` with the given AI provider.
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }
}
