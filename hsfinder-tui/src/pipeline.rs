//! Query rewriting ahead of the main search call.
//!
//! Spelling correction is best-effort: any failure leaves the query as typed
//! and is reported as a warning, never as an error.

use crate::api_client::{ApiClient, ApiClientError};
use crate::types::SpellingCorrection;

/// Query to send, plus what the user should be told about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub final_query: String,
    pub was_corrected: bool,
    pub correction_note: Option<String>,
    pub warning: Option<String>,
}

impl ResolvedQuery {
    fn unchanged(raw_query: &str) -> Self {
        Self {
            final_query: raw_query.to_string(),
            was_corrected: false,
            correction_note: None,
            warning: None,
        }
    }
}

pub async fn resolve_query(api: &ApiClient, raw_query: &str, use_spelling: bool) -> ResolvedQuery {
    if !use_spelling {
        return ResolvedQuery::unchanged(raw_query);
    }
    let outcome = api.correct_spelling(raw_query).await;
    apply_correction(raw_query, outcome)
}

/// Fold a spelling-correction outcome into the query to search with.
pub fn apply_correction(
    raw_query: &str,
    outcome: Result<SpellingCorrection, ApiClientError>,
) -> ResolvedQuery {
    match outcome {
        Ok(SpellingCorrection {
            corrected_query: Some(corrected),
        }) if corrected != raw_query && !corrected.trim().is_empty() => {
            tracing::info!(original = raw_query, corrected = %corrected, "using corrected query");
            ResolvedQuery {
                correction_note: Some(format!("Using corrected query: {}", corrected)),
                final_query: corrected,
                was_corrected: true,
                warning: None,
            }
        }
        Ok(_) => ResolvedQuery::unchanged(raw_query),
        Err(err) => {
            tracing::warn!(error = %err, query = raw_query, "spelling correction failed, searching with original query");
            ResolvedQuery {
                warning: Some(format!("Spelling correction unavailable: {}", err)),
                ..ResolvedQuery::unchanged(raw_query)
            }
        }
    }
}
