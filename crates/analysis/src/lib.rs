//! Generative-analysis collaborator boundary for pdf-prism
//!
//! An external service may look at what was extracted from a document
//! and *suggest* a theme and font system. This crate defines that
//! boundary: the [`StyleAnalyzer`] trait, the summary handed to it, and
//! the timeout wrapper the engine awaits it through.
//!
//! Suggestions are untrusted input. Nothing here validates them — they
//! flow through the same strict validator as internally synthesized
//! candidates — and nothing here is load-bearing: on any error or
//! timeout the engine proceeds with its deterministic synthesis path.
//! This is the engine's sole retry/fallback boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use color_science::RawColor;
use theming::{FontSystem, Theme};

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors from the analysis collaborator.
///
/// All of these are recoverable: the engine logs them and falls back to
/// deterministic synthesis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The collaborator did not answer within the configured timeout.
    #[error("Analysis timed out after {0:?}")]
    Timeout(Duration),

    /// The collaborator could not be reached or failed internally.
    #[error("Analysis unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered but declined to produce a suggestion.
    #[error("Analysis rejected the request: {0}")]
    Rejected(String),
}

/// What the analyzer gets to see: the extracted raw material, not the
/// synthesized theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionSummary {
    /// Every color observed in the document.
    pub colors: Vec<RawColor>,
    /// Every font name observed in the document.
    pub fonts: Vec<String>,
    /// Number of pages scanned.
    pub page_count: usize,
}

/// A proposed theme and font system, in the same shape as the engine's
/// own output. Treated as untrusted until validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestion {
    /// Proposed color theme.
    pub theme: Theme,
    /// Proposed font system.
    pub fonts: FontSystem,
}

/// Timeout configuration for the analyzer call.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// How long to wait for a suggestion before falling back.
    pub timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl AnalyzerConfig {
    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// An external collaborator that proposes themes.
///
/// Implementations are black boxes to the engine — typically a client
/// for a generative-analysis service. The engine never relies on a
/// suggestion arriving, being well-formed, or drawing from the extracted
/// set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StyleAnalyzer: Send + Sync {
    /// Propose a theme and font system for the summarized document.
    async fn suggest(&self, summary: &ExtractionSummary) -> Result<StyleSuggestion>;
}

/// Await a suggestion, bounding the wait with the configured timeout.
///
/// An elapsed timeout maps to [`AnalysisError::Timeout`]; the caller
/// decides what failure means (the engine falls back to deterministic
/// synthesis).
pub async fn suggest_with_timeout(
    analyzer: &dyn StyleAnalyzer,
    summary: &ExtractionSummary,
    config: &AnalyzerConfig,
) -> Result<StyleSuggestion> {
    debug!(timeout = ?config.timeout, "requesting style suggestion");
    match tokio::time::timeout(config.timeout, analyzer.suggest(summary)).await {
        Ok(result) => result,
        Err(_) => Err(AnalysisError::Timeout(config.timeout)),
    }
}
