//! Ontology access trait and the in-memory implementation.
//!
//! Facet resolution only needs a handful of read-only queries over the class
//! hierarchy, so any ontology representation can be plugged in by
//! implementing [`OntologyModel`].

use std::collections::HashMap;
use std::path::Path;

use crate::error::{OntologyError, Result};
use crate::ontology::{ClassExpression, OntologyClass, OntologyDocument, OntologyStats};

// ============================================================================
// OntologyModel Trait
// ============================================================================

/// Read-only class hierarchy queries.
///
/// Implementations must be safe for concurrent reads; nothing mutates the
/// model while documents are processed.
pub trait OntologyModel: Send + Sync {
    /// Whether the identifier names a known class.
    fn contains_class(&self, iri: &str) -> bool;

    /// `subClassOf` targets of a class.
    fn superclasses(&self, iri: &str) -> Vec<ClassExpression>;

    /// `equivalentClass` targets of a class.
    fn equivalent_classes(&self, iri: &str) -> Vec<ClassExpression>;

    /// Human-readable label of a class.
    fn label(&self, iri: &str) -> Option<String>;

    /// Whether the class carries the facet annotation.
    fn has_facet_annotation(&self, iri: &str) -> bool;

    /// Target of the class's parent-annotation edge.
    fn parent_annotation_target(&self, iri: &str) -> Option<String>;

    /// Whether the class carries a parent-annotation edge.
    fn has_parent_annotation(&self, iri: &str) -> bool {
        self.parent_annotation_target(iri).is_some()
    }
}

// ============================================================================
// In-Memory Ontology
// ============================================================================

/// Ontology held entirely in memory, indexed by class IRI.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOntology {
    classes: HashMap<String, OntologyClass>,
}

impl InMemoryOntology {
    /// Create an empty ontology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an ontology from class records, rejecting duplicate IRIs.
    pub fn from_classes(classes: impl IntoIterator<Item = OntologyClass>) -> Result<Self> {
        let mut ontology = Self::new();
        for class in classes {
            if ontology.classes.contains_key(&class.iri) {
                return Err(OntologyError::DuplicateClass(class.iri).into());
            }
            ontology.classes.insert(class.iri.clone(), class);
        }
        Ok(ontology)
    }

    /// Parse a JSON class document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: OntologyDocument = serde_json::from_str(content)
            .map_err(|e| OntologyError::Load(format!("invalid class document: {}", e)))?;
        Self::from_classes(document.classes)
    }

    /// Load a JSON class document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            OntologyError::Load(format!("failed to read {}: {}", path.display(), e))
        })?;
        let ontology = Self::from_json_str(&content)?;
        let stats = ontology.stats();
        tracing::info!(
            "Loaded ontology from {}: {} classes, {} facets",
            path.display(),
            stats.classes,
            stats.facets
        );
        Ok(ontology)
    }

    /// Insert or replace a class.
    pub fn insert(&mut self, class: OntologyClass) {
        self.classes.insert(class.iri.clone(), class);
    }

    /// Builder-style insert.
    pub fn with_class(mut self, class: OntologyClass) -> Self {
        self.insert(class);
        self
    }

    /// Look up a class record.
    pub fn get(&self, iri: &str) -> Option<&OntologyClass> {
        self.classes.get(iri)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// IRIs of every facet class.
    pub fn facets(&self) -> Vec<&str> {
        let mut facets: Vec<&str> = self
            .classes
            .values()
            .filter(|c| c.facet)
            .map(|c| c.iri.as_str())
            .collect();
        facets.sort_unstable();
        facets
    }

    pub fn stats(&self) -> OntologyStats {
        OntologyStats {
            classes: self.classes.len(),
            facets: self.classes.values().filter(|c| c.facet).count(),
            parent_annotations: self
                .classes
                .values()
                .filter(|c| c.parent_annotation.is_some())
                .count(),
        }
    }
}

impl OntologyModel for InMemoryOntology {
    fn contains_class(&self, iri: &str) -> bool {
        self.classes.contains_key(iri)
    }

    fn superclasses(&self, iri: &str) -> Vec<ClassExpression> {
        self.classes
            .get(iri)
            .map(|c| c.superclasses.clone())
            .unwrap_or_default()
    }

    fn equivalent_classes(&self, iri: &str) -> Vec<ClassExpression> {
        self.classes
            .get(iri)
            .map(|c| c.equivalents.clone())
            .unwrap_or_default()
    }

    fn label(&self, iri: &str) -> Option<String> {
        self.classes.get(iri).and_then(|c| c.label.clone())
    }

    fn has_facet_annotation(&self, iri: &str) -> bool {
        self.classes.get(iri).is_some_and(|c| c.facet)
    }

    fn parent_annotation_target(&self, iri: &str) -> Option<String> {
        self.classes
            .get(iri)
            .and_then(|c| c.parent_annotation.clone())
    }
}
