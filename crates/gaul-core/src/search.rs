use gaul_genai::GenerativeBackend;
use gaul_types::{Language, SearchResult};

use crate::error::SearchError;
use crate::interpret::interpret_youth_language;
use crate::preprocess::normalize_query;
use crate::related::suggest_related_terms;

/// Outcome envelope handed to the surrounding UI: exactly one side is set.
#[derive(Debug)]
pub struct SearchOutcome {
    pub data: Option<SearchResult>,
    pub error: Option<String>,
}

/// Run one search: validate, fan out both AI calls, join, aggregate.
pub async fn search<B: GenerativeBackend + ?Sized>(
    backend: &B,
    query: &str,
    language: Language,
) -> Result<SearchResult, SearchError> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    tracing::debug!(%query, %language, "dispatching search");

    // Join, not a race: both outcomes are needed before aggregation.
    let (interpretation, related_terms) = tokio::join!(
        interpret_youth_language(backend, &query, language),
        suggest_related_terms(backend, &query),
    );

    let interpretation = interpretation.map_err(|e| {
        tracing::error!(error = %e, "interpretation call failed");
        SearchError::Unexpected(e)
    });
    let related_terms = related_terms.map_err(|e| {
        tracing::error!(error = %e, "related-terms call failed");
        SearchError::Unexpected(e)
    });

    let interpretation = interpretation?;

    // An empty meaning is reported as such even when the related-terms call
    // failed.
    if !interpretation.has_meaning() {
        return Err(SearchError::NoInterpretation);
    }

    let related_terms = related_terms?;

    Ok(SearchResult {
        interpretation,
        related_terms,
    })
}

/// UI-facing entry point mapping every failure to its localized message.
pub async fn perform_search<B: GenerativeBackend + ?Sized>(
    backend: &B,
    query: &str,
    language: Language,
) -> SearchOutcome {
    match search(backend, query, language).await {
        Ok(result) => SearchOutcome {
            data: Some(result),
            error: None,
        },
        Err(e) => SearchOutcome {
            data: None,
            error: Some(e.message(language).to_string()),
        },
    }
}
