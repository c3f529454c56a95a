use gaul_genai::GenAiError;
use gaul_types::Language;

use crate::messages;

/// Terminal failure kinds of a search request
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Query was empty after normalization; nothing was dispatched
    #[error("empty search query")]
    EmptyQuery,

    /// Both calls completed but the model produced no meaning
    #[error("no interpretation found")]
    NoInterpretation,

    /// A sub-call failed; detail stays in the logs
    #[error("search failed")]
    Unexpected(#[from] GenAiError),
}

impl SearchError {
    /// Localized user-facing message; never exposes the underlying error
    pub fn message(&self, language: Language) -> &'static str {
        match self {
            SearchError::EmptyQuery => messages::empty_query(language),
            SearchError::NoInterpretation => messages::no_interpretation(language),
            SearchError::Unexpected(_) => messages::unexpected(language),
        }
    }
}

/// Failure kinds of the comic-strip flow
#[derive(Debug, thiserror::Error)]
pub enum ComicError {
    #[error("term phrase cannot be empty")]
    EmptyTerm,

    /// The capability returned no image; there is no fallback
    #[error("image generation failed")]
    Generation(#[from] GenAiError),
}

impl ComicError {
    pub fn message(&self, language: Language) -> &'static str {
        messages::comic_failed(language)
    }
}
