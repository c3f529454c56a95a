use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Response and error-message locale, fixed for the lifetime of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Id,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "id" => Ok(Language::Id),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown language code: {0}")]
pub struct ParseLanguageError(String);

/// Structured explanation of a slang or emoji term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub term_phrase: String,
    /// Platform where the term is commonly used (Instagram, TikTok, ...)
    pub platform: String,
    pub meaning: String,
    /// Linguistic category (Emoji, Singkatan, Slang, ...)
    pub linguistic_category: String,
    /// Social category (Komunikasi Sosial, Ekspresi Emosi, ...)
    pub social_category: String,
    pub explanation: String,
    #[serde(default)]
    pub references: Vec<String>,
}

impl Interpretation {
    /// An empty meaning counts as "no interpretation found" even when the
    /// call itself succeeded.
    pub fn has_meaning(&self) -> bool {
        !self.meaning.trim().is_empty()
    }
}

/// Aggregate of one interpretation and its related-terms suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub interpretation: Interpretation,
    pub related_terms: Vec<String>,
}

/// Input of the comic-strip flow: a term plus its example dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicRequest {
    pub term_phrase: String,
    pub example_sentences: Vec<String>,
    pub language: Language,
}
