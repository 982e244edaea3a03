//! Facet resolution over the class hierarchy.
//!
//! A facet is any class carrying the facet annotation. Resolving a class
//! walks depth-first from it until a facet is reached, trying edges in a
//! fixed order:
//!
//! 1. the class itself (facet annotation),
//! 2. the parent-annotation edge, which short-circuits everything below,
//! 3. equivalence axioms naming a single class,
//! 4. superclass axioms naming a single class.
//!
//! The first success wins. Every walk carries a visited set so cyclic
//! hierarchies terminate; a revisited class simply yields nothing on that
//! branch.

use std::collections::HashSet;
use std::sync::Arc;

use moka::sync::Cache;

use crate::config::OntologyConfig;
use crate::ontology::{iri_fragment, OntologyModel};

/// Maps ontology classes to their governing facet.
#[derive(Clone)]
pub struct FacetResolver {
    ontology: Arc<dyn OntologyModel>,
    top_class: String,
    /// Memoized results of complete walks, keyed by starting class.
    cache: Cache<String, Option<String>>,
}

impl FacetResolver {
    /// Create a resolver with the given top class and cache capacity.
    pub fn new(
        ontology: Arc<dyn OntologyModel>,
        top_class: impl Into<String>,
        cache_capacity: u64,
    ) -> Self {
        Self {
            ontology,
            top_class: top_class.into(),
            cache: Cache::new(cache_capacity),
        }
    }

    /// Create a resolver from configuration.
    pub fn from_config(ontology: Arc<dyn OntologyModel>, config: &OntologyConfig) -> Self {
        Self::new(ontology, &config.top_class, config.facet_cache_capacity)
    }

    /// The underlying ontology.
    pub fn ontology(&self) -> &dyn OntologyModel {
        self.ontology.as_ref()
    }

    /// Resolve the facet of `class` with a fresh visited set.
    ///
    /// Results are memoized per starting class.
    pub fn resolve(&self, class: &str) -> Option<String> {
        if let Some(cached) = self.cache.get(class) {
            return cached;
        }
        let mut visited = HashSet::new();
        let facet = self.resolve_facet(class, &mut visited);
        self.cache.insert(class.to_string(), facet.clone());
        facet
    }

    /// Resolve the facet of `class`, sharing `visited` with the caller.
    ///
    /// Each class is entered at most once per visited set. Nothing here is
    /// cached: a result computed under a partially filled visited set may
    /// differ from a fresh walk.
    pub fn resolve_facet(&self, class: &str, visited: &mut HashSet<String>) -> Option<String> {
        if !visited.insert(class.to_string()) {
            return None;
        }

        if class == self.top_class {
            return None;
        }

        if self.ontology.has_facet_annotation(class) {
            return Some(class.to_string());
        }

        if let Some(target) = self.ontology.parent_annotation_target(class) {
            tracing::trace!("Following parent annotation {} -> {}", class, target);
            return self.resolve_facet(&target, visited);
        }

        for expr in self.ontology.equivalent_classes(class) {
            let Some(equivalent) = expr.as_named() else {
                continue;
            };
            if let Some(facet) = self.resolve_facet(equivalent, visited) {
                return Some(facet);
            }
        }

        let own_label = self.ontology.label(class);
        for expr in self.ontology.superclasses(class) {
            let Some(parent) = expr.as_named() else {
                continue;
            };
            if own_label.is_some() && self.ontology.label(parent) == own_label {
                continue;
            }
            if let Some(facet) = self.resolve_facet(parent, visited) {
                return Some(facet);
            }
        }

        None
    }

    /// Display label of a facet, falling back to its IRI fragment.
    pub fn facet_label(&self, facet: &str) -> String {
        self.ontology
            .label(facet)
            .unwrap_or_else(|| iri_fragment(facet).to_string())
    }

    /// Number of memoized walks.
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Drop all memoized walks.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl std::fmt::Debug for FacetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetResolver")
            .field("top_class", &self.top_class)
            .field("cache_entries", &self.cache.entry_count())
            .finish()
    }
}
