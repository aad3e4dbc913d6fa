//! Raw per-page input records.
//!
//! These are the opaque records the document decoder produces; this
//! engine consumes them as-is and never constructs them from a real
//! document itself.

use serde::{Deserialize, Serialize};

/// One page worth of raw content from the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-based page number.
    pub page: usize,

    /// Decoded content-stream text: drawing operators, color operators,
    /// and any literal values the decoder exposes as text.
    pub raw_stream: String,

    /// Positioned text runs with their font metadata.
    pub text_runs: Vec<TextRun>,
}

impl PageContent {
    /// Create a page with a raw stream and no text runs.
    pub fn new(page: usize, raw_stream: impl Into<String>) -> Self {
        Self {
            page,
            raw_stream: raw_stream.into(),
            text_runs: Vec::new(),
        }
    }

    /// Add a text run to the page.
    pub fn with_run(mut self, run: TextRun) -> Self {
        self.text_runs.push(run);
        self
    }
}

/// A single text run: one font at one size, with a sample of its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Font name as reported by the decoder (may carry a subset prefix
    /// like `ABCDEF+Helvetica-Bold`).
    pub font_name: String,

    /// Rendered size in points.
    pub font_size: f64,

    /// A short sample of the run's text.
    pub text: String,
}

impl TextRun {
    /// Create a text run.
    pub fn new(font_name: impl Into<String>, font_size: f64, text: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            font_size,
            text: text.into(),
        }
    }
}
