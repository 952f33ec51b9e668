//! # Default Prompt Templates
//!
//! The fixed prompts used by the [`Translator`](crate::Translator). The user
//! prompt pins the model to a strict `Label: value` line format so the
//! response can be parsed by prefix matching alone.

/// The system prompt for the translation task.
pub const TRANSLATION_SYSTEM_PROMPT: &str = "You are a precise bilingual dictionary. Follow the requested output format exactly, with no extra commentary or markdown.";

/// The user prompt for the translation task.
///
/// Placeholders: `{word}`
pub const TRANSLATION_USER_PROMPT: &str = r#"Translate the word "{word}" and provide its information.
Please respond in the following format only:
Chinese: [Chinese translation (keep it simple)]
English: [Simple explanation in English (maximum 10 words)]
Phonetic: [Standard phonetic transcription of the word]"#;
