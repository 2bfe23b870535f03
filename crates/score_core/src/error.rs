use std::time::Duration;

use thiserror::Error;

use crate::source::Scope;

/// Failure reported by a facet or document backend.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Query timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed backend response: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StatsError {
    /// A backend query failed; the current computation is aborted.
    #[error("Backend unavailable while {context}: {source}")]
    BackendUnavailable {
        context: String,
        #[source]
        source: SourceError,
    },

    /// A full scan could not cover the whole scope in one page.
    #[error(
        "Scope {scope} holds {total_hits} matches ({returned} returned), \
         reaching the page cap of {page_size}"
    )]
    ScopeOverflow {
        scope: Scope,
        returned: usize,
        total_hits: u64,
        page_size: usize,
    },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

impl StatsError {
    pub(crate) fn backend(context: impl Into<String>, source: SourceError) -> Self {
        StatsError::BackendUnavailable {
            context: context.into(),
            source,
        }
    }

    /// Whether retrying the same call later may succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StatsError::BackendUnavailable { source, .. } => matches!(
                source,
                SourceError::Unreachable(_) | SourceError::Timeout(_) | SourceError::Io(_)
            ),
            // Needs a larger page size, not a retry
            StatsError::ScopeOverflow { .. } => false,
            StatsError::InvalidConfig(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
