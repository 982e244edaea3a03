//! Core types for the ontology access layer.
//!
//! Classes are addressed by IRI strings. Hierarchy edges (superclass and
//! equivalence axioms) are kept as [`ClassExpression`]s because only edges
//! that name a single class take part in facet resolution; restrictions and
//! boolean combinations are carried but skipped.

use serde::{Deserialize, Serialize};

// ============================================================================
// Class Expressions
// ============================================================================

/// The target of a superclass or equivalence axiom.
///
/// In JSON a named class is a bare IRI string; anything else is an object
/// describing the construct:
///
/// ```json
/// ["http://example.org/Gauge", {"kind": "some_values_from", "classes": ["http://example.org/Rain"]}]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassExpression {
    /// A single named class.
    Named(String),
    /// A restriction, intersection, union or other anonymous expression.
    Complex(ComplexExpression),
}

impl ClassExpression {
    /// Create a named class expression.
    pub fn named(iri: impl Into<String>) -> Self {
        Self::Named(iri.into())
    }

    /// Create an anonymous expression over the given classes.
    pub fn complex(
        kind: impl Into<String>,
        classes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Complex(ComplexExpression {
            kind: kind.into(),
            classes: classes.into_iter().map(Into::into).collect(),
        })
    }

    /// The class IRI if this expression is exactly one named class.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(iri) => Some(iri),
            Self::Complex(_) => None,
        }
    }
}

/// An anonymous class expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexExpression {
    /// Expression constructor, e.g. `intersection_of` or `some_values_from`.
    pub kind: String,
    /// Classes mentioned in the expression's signature.
    #[serde(default)]
    pub classes: Vec<String>,
}

// ============================================================================
// Class Records
// ============================================================================

/// One ontology class with the axioms and annotations facet resolution needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyClass {
    /// Class IRI.
    pub iri: String,
    /// Human-readable label (`rdfs:label`).
    #[serde(default)]
    pub label: Option<String>,
    /// `subClassOf` targets.
    #[serde(default)]
    pub superclasses: Vec<ClassExpression>,
    /// `equivalentClass` targets.
    #[serde(default)]
    pub equivalents: Vec<ClassExpression>,
    /// Whether the class carries the facet annotation.
    #[serde(default)]
    pub facet: bool,
    /// Target of the parent-annotation override edge.
    #[serde(default)]
    pub parent_annotation: Option<String>,
}

impl OntologyClass {
    /// Create a bare class.
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            label: None,
            superclasses: Vec::new(),
            equivalents: Vec::new(),
            facet: false,
            parent_annotation: None,
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a named superclass.
    pub fn with_superclass(mut self, iri: impl Into<String>) -> Self {
        self.superclasses.push(ClassExpression::named(iri));
        self
    }

    /// Add a named equivalent class.
    pub fn with_equivalent(mut self, iri: impl Into<String>) -> Self {
        self.equivalents.push(ClassExpression::named(iri));
        self
    }

    /// Add an arbitrary superclass expression.
    pub fn with_superclass_expression(mut self, expr: ClassExpression) -> Self {
        self.superclasses.push(expr);
        self
    }

    /// Add an arbitrary equivalence expression.
    pub fn with_equivalent_expression(mut self, expr: ClassExpression) -> Self {
        self.equivalents.push(expr);
        self
    }

    /// Mark the class as a facet.
    pub fn as_facet(mut self) -> Self {
        self.facet = true;
        self
    }

    /// Point the parent-annotation edge at another class.
    pub fn with_parent_annotation(mut self, iri: impl Into<String>) -> Self {
        self.parent_annotation = Some(iri.into());
        self
    }
}

/// On-disk layout of an ontology class file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OntologyDocument {
    #[serde(default)]
    pub classes: Vec<OntologyClass>,
}

/// Counts describing a loaded ontology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyStats {
    pub classes: usize,
    pub facets: usize,
    pub parent_annotations: usize,
}

/// Last path segment or fragment of an IRI, used when a class has no label.
pub fn iri_fragment(iri: &str) -> &str {
    iri.rsplit(['#', '/'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(iri)
}
