//! Ontology access and facet resolution.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Ontology Layer                        │
//! │  ┌───────────────────┐        ┌──────────────────────┐  │
//! │  │  OntologyModel    │ ◄───── │    FacetResolver     │  │
//! │  │ (class hierarchy) │        │ (memoized DFS walk)  │  │
//! │  └───────────────────┘        └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! [`OntologyModel`] is the read-only capability set the resolver needs;
//! [`InMemoryOntology`] implements it over a JSON class file.

mod resolver;
mod store;
mod types;

pub use resolver::FacetResolver;
pub use store::{InMemoryOntology, OntologyModel};
pub use types::*;
