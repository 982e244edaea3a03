//! Document, keyword and output records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }

    /// The text handed to the pipeline: optionally the title, a space, then the body.
    pub fn extraction_text(&self, include_title: bool) -> String {
        if include_title {
            format!("{} {}", self.title, self.text)
        } else {
            self.text.clone()
        }
    }
}

/// A classified keyword found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Surface text that matched.
    pub text: String,
    /// `[start, end]` character offsets of the originating chunk.
    pub span: [usize; 2],
    /// IRI of the facet class.
    pub facet: String,
    /// Display label of the facet class.
    pub facet_label: String,
}

impl Keyword {
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        facet: impl Into<String>,
        facet_label: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            span: [start, end],
            facet: facet.into(),
            facet_label: facet_label.into(),
        }
    }

    pub fn start(&self) -> usize {
        self.span[0]
    }

    pub fn end(&self) -> usize {
        self.span[1]
    }
}

/// Extraction result for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(rename = "keyword")]
    pub keywords: Vec<Keyword>,
}

impl Output {
    pub fn new(document: &Document, keywords: Vec<Keyword>) -> Self {
        Self {
            id: document.id.clone(),
            title: document.title.clone(),
            text: document.text.clone(),
            keywords,
        }
    }

    /// Whether the document produced no keywords and needs manual review.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Result of a batch run over several documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// One output per input document, in input order.
    pub outputs: Vec<Output>,
    /// Ids of documents that yielded no keywords.
    pub no_keywords: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub processing_ms: u64,
}

impl BatchReport {
    pub fn documents(&self) -> usize {
        self.outputs.len()
    }

    pub fn keywords_found(&self) -> usize {
        self.outputs.iter().map(|o| o.keywords.len()).sum()
    }

    /// Outputs that carry at least one keyword.
    pub fn with_keywords(&self) -> impl Iterator<Item = &Output> {
        self.outputs.iter().filter(|o| !o.is_empty())
    }
}
