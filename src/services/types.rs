//! Wire types exchanged with the lexical and vocabulary services.

use serde::{Deserialize, Serialize};

/// A chunk of source text produced by the lexical service.
///
/// Offsets are character positions within the text that was chunked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub token: String,
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn new(token: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            token: token.into(),
            start,
            end,
        }
    }

    /// A chunk carrying a different token but this chunk's span.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            start: self.start,
            end: self.end,
        }
    }
}

/// A sub-token and its part-of-speech tag (Penn Treebank tag set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeech {
    pub token: String,
    pub pos: String,
}

impl PartOfSpeech {
    pub fn new(token: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            pos: pos.into(),
        }
    }
}

/// A controlled-vocabulary entry returned by a term lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Concept IRI. Newer service versions send it as `iri`.
    #[serde(alias = "iri")]
    pub uri: String,
    /// Compact identifier, e.g. `CHEBI:15377`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curie: Option<String>,
    /// Human-readable labels, preferred label first.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Concept {
    pub fn new(
        uri: impl Into<String>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            uri: uri.into(),
            curie: None,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The concept identifier.
    pub fn iri(&self) -> &str {
        &self.uri
    }

    /// Whether any label equals `token` exactly (case-sensitive).
    pub fn has_exact_label(&self, token: &str) -> bool {
        self.labels.iter().any(|label| label == token)
    }

    /// Whether the concept's identifier falls under `namespace`.
    pub fn in_namespace(&self, namespace: &str) -> bool {
        !namespace.is_empty()
            && (self.uri.contains(namespace)
                || self.curie.as_deref().is_some_and(|c| c.contains(namespace)))
    }
}

/// The concepts matched by a single lookup, in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocab {
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

impl Vocab {
    pub fn new(concepts: Vec<Concept>) -> Self {
        Self { concepts }
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// First label of the first concept.
    pub fn primary_label(&self) -> Option<&str> {
        self.concepts
            .first()
            .and_then(|c| c.labels.first())
            .map(String::as_str)
    }
}
