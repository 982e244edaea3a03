//! keyfacet: ontology-driven keyword extraction
//!
//! Extracts domain keywords from free text. Text is chunked by a remote
//! lexical service, each chunk is looked up in a controlled vocabulary, and
//! the matched concept is classified by walking the ontology's class
//! hierarchy up to the nearest facet.

pub mod config;
pub mod error;
pub mod extraction;
pub mod ontology;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, KeyfacetError, OntologyError, Result, ServiceError};
pub use extraction::{BatchReport, ChunkOutcome, Document, Keyword, KeywordPipeline, Output};
pub use ontology::{
    ClassExpression, FacetResolver, InMemoryOntology, OntologyClass, OntologyModel, OntologyStats,
};
pub use services::{
    Chunk, Concept, LexicalService, PartOfSpeech, SciGraphClient, Vocab, VocabularyService,
};
