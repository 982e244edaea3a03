//! Keyword extraction.
//!
//! # Architecture
//!
//! ```text
//! Document (title + text)
//!       │
//!       ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │               Keyword Extraction Pipeline                │
//! │  ┌─────────────┐ ┌──────────────┐ ┌──────────────────┐  │
//! │  │  Chunking   │ │  Vocabulary  │ │ Facet Resolution │  │
//! │  │ (+ POS      │►│    Lookup    │►│  + override      │  │
//! │  │  fallback)  │ │ (+ stoplist) │ │    rules         │  │
//! │  └─────────────┘ └──────────────┘ └──────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//!       │
//!       ▼
//! Output { id, title, text, keywords }
//! ```

mod pipeline;
mod types;

pub use pipeline::{ChunkOutcome, KeywordPipeline};
pub use types::{BatchReport, Document, Keyword, Output};
