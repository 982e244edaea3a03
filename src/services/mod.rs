//! Remote service clients.
//!
//! The pipeline talks to two collaborators through traits so they can be
//! swapped for in-process fakes:
//!
//! - [`LexicalService`]: chunks text into candidate phrases and tags
//!   sub-tokens with parts of speech.
//! - [`VocabularyService`]: looks a candidate string up in the controlled
//!   vocabulary.
//!
//! [`SciGraphClient`] implements both against a SciGraph REST server.

mod scigraph;
mod traits;
mod types;

pub use scigraph::SciGraphClient;
pub use traits::{LexicalService, VocabularyService};
pub use types::{Chunk, Concept, PartOfSpeech, Vocab};
