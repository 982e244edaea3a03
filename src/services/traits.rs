//! Service trait definitions.

use async_trait::async_trait;

use crate::error::Result;
use crate::services::{Chunk, PartOfSpeech, Vocab};

/// Text chunking and part-of-speech tagging.
#[async_trait]
pub trait LexicalService: Send + Sync {
    /// Split text into ordered chunks with character spans.
    async fn chunk(&self, text: &str) -> Result<Vec<Chunk>>;

    /// Tag the sub-tokens of a string.
    async fn pos(&self, text: &str) -> Result<Vec<PartOfSpeech>>;
}

/// Controlled-vocabulary term lookup.
#[async_trait]
pub trait VocabularyService: Send + Sync {
    /// Look up concepts matching a term.
    ///
    /// Returns `Ok(None)` when the service reports no match.
    async fn lookup(&self, term: &str) -> Result<Option<Vocab>>;
}
