//! Keyword extraction pipeline.
//!
//! For each document the pipeline chunks the text, looks every chunk up in
//! the controlled vocabulary and classifies the matched concept by facet.
//! Chunks that do not resolve as a whole are POS-tagged and their noun and
//! adjective sub-tokens are retried one by one, with hyphenated sub-tokens
//! retried as space-separated phrases.
//!
//! A token string is looked up at most once per document.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::config::{Config, PipelineConfig};
use crate::error::Result;
use crate::extraction::{BatchReport, Document, Keyword, Output};
use crate::ontology::{FacetResolver, OntologyModel};
use crate::services::{Chunk, Concept, LexicalService, SciGraphClient, Vocab, VocabularyService};

/// Why a chunk did or did not become a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkOutcome {
    Accepted,
    /// The token was already resolved earlier in this document.
    AlreadyVisited,
    /// Stoplisted, not found, or the lookup failed.
    NoMatch,
    /// Every returned concept was on the null IRI deny-list.
    Denylisted,
    /// A short token matched a chemical entity.
    ShortChemical,
    /// No facet is reachable from the concept's class.
    NoFacet,
    /// Equipment match without an exact label match.
    EquipmentLabelMismatch,
    /// Observation facet, never accepted.
    ObservationFacet,
}

impl ChunkOutcome {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

/// Orchestrates chunking, vocabulary lookup and facet resolution.
pub struct KeywordPipeline {
    lexical: Arc<dyn LexicalService>,
    vocabulary: Arc<dyn VocabularyService>,
    resolver: FacetResolver,
    config: PipelineConfig,
    stoplist: HashSet<String>,
    null_iris: HashSet<String>,
    candidate_tags: HashSet<String>,
}

impl KeywordPipeline {
    /// Create a pipeline from its collaborators.
    pub fn new(
        lexical: Arc<dyn LexicalService>,
        vocabulary: Arc<dyn VocabularyService>,
        resolver: FacetResolver,
        config: PipelineConfig,
    ) -> Self {
        let stoplist = config
            .stoplist
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        let null_iris = config.null_iris.iter().cloned().collect();
        let candidate_tags = config.candidate_pos_tags.iter().cloned().collect();
        Self {
            lexical,
            vocabulary,
            resolver,
            config,
            stoplist,
            null_iris,
            candidate_tags,
        }
    }

    /// Create a pipeline backed by a SciGraph server.
    pub fn from_config(config: &Config, ontology: Arc<dyn OntologyModel>) -> Result<Self> {
        let client = Arc::new(SciGraphClient::from_config(
            &config.service,
            &config.vocabulary,
        )?);
        let resolver = FacetResolver::from_config(ontology, &config.ontology);
        Ok(Self::new(
            client.clone(),
            client,
            resolver,
            config.pipeline.clone(),
        ))
    }

    pub fn resolver(&self) -> &FacetResolver {
        &self.resolver
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Token to IRI overrides. Accepted from configuration; matching does not use them yet.
    pub fn exception_map(&self) -> &BTreeMap<String, String> {
        &self.config.exception_map
    }

    // ========================================================================
    // Batch and Document Processing
    // ========================================================================

    /// Process documents one after another.
    ///
    /// A failing document yields an empty output; the batch always runs to
    /// completion.
    pub async fn process_documents(&self, documents: &[Document]) -> BatchReport {
        let started_at = Utc::now();
        let start = Instant::now();

        let mut outputs = Vec::with_capacity(documents.len());
        for document in documents {
            outputs.push(self.process_document(document).await);
        }

        let no_keywords = outputs
            .iter()
            .filter(|o| o.is_empty())
            .map(|o| o.id.clone())
            .collect();

        BatchReport {
            outputs,
            no_keywords,
            started_at,
            completed_at: Utc::now(),
            processing_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Extract keywords from one document.
    pub async fn process_document(&self, document: &Document) -> Output {
        tracing::info!("processing: {}", document.title);

        let text = document.extraction_text(self.config.include_title);
        let keywords = match self.process(&text).await {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!("{}: chunking failed: {}", document.id, e);
                Vec::new()
            }
        };

        if keywords.is_empty() {
            tracing::warn!("{}: no keywords", document.title);
        } else {
            tracing::debug!("{}: {} keywords", document.title, keywords.len());
        }

        Output::new(document, keywords)
    }

    /// Extract keywords from raw text.
    ///
    /// Only a chunking failure is an error; failures on individual chunks and
    /// sub-tokens just skip that candidate.
    pub async fn process(&self, text: &str) -> Result<Vec<Keyword>> {
        let chunks = self.lexical.chunk(text).await?;

        let mut keywords = Vec::new();
        let mut visited = HashSet::new();

        for chunk in &chunks {
            if self.process_chunk(chunk, &mut keywords, &mut visited).await {
                continue;
            }
            self.process_sub_tokens(chunk, &mut keywords, &mut visited).await;
        }

        Ok(keywords)
    }

    /// Retry a failed chunk per POS-tagged sub-token.
    async fn process_sub_tokens(
        &self,
        chunk: &Chunk,
        keywords: &mut Vec<Keyword>,
        visited: &mut HashSet<String>,
    ) {
        let parts = match self.lexical.pos(&chunk.token).await {
            Ok(parts) => parts,
            Err(e) => {
                tracing::debug!("POS tagging failed for {:?}: {}", chunk.token, e);
                return;
            }
        };

        for part in parts {
            if !self.candidate_tags.contains(&part.pos) {
                continue;
            }
            let candidate = match part.token.split_once('-') {
                Some((head, tail)) => format!("{} {}", head, tail),
                None => part.token.clone(),
            };
            self.process_chunk(&chunk.with_token(candidate), keywords, visited)
                .await;
        }
    }

    // ========================================================================
    // Chunk Resolution
    // ========================================================================

    /// Try to turn one chunk into a keyword, appending it on success.
    pub async fn process_chunk(
        &self,
        chunk: &Chunk,
        keywords: &mut Vec<Keyword>,
        visited: &mut HashSet<String>,
    ) -> bool {
        let outcome = self.evaluate_chunk(chunk, keywords, visited).await;
        if !outcome.is_accepted() && outcome != ChunkOutcome::NoMatch {
            tracing::debug!("Rejected {:?}: {:?}", chunk.token, outcome);
        }
        outcome.is_accepted()
    }

    /// Like [`process_chunk`](Self::process_chunk), reporting why a chunk was rejected.
    pub async fn evaluate_chunk(
        &self,
        chunk: &Chunk,
        keywords: &mut Vec<Keyword>,
        visited: &mut HashSet<String>,
    ) -> ChunkOutcome {
        let token = chunk.token.as_str();
        if visited.contains(token) {
            return ChunkOutcome::AlreadyVisited;
        }

        let Some(vocab) = self.lookup_term(token).await else {
            return ChunkOutcome::NoMatch;
        };
        visited.insert(token.to_string());

        let Some(concept) = self.select_concept(vocab) else {
            return ChunkOutcome::Denylisted;
        };

        if token.chars().count() <= self.config.chemical_guard_max_len
            && concept.in_namespace(&self.config.chemical_namespace)
        {
            return ChunkOutcome::ShortChemical;
        }

        let Some(facet) = self.resolver.resolve(concept.iri()) else {
            return ChunkOutcome::NoFacet;
        };

        if facet == self.config.equipment_facet && !concept.has_exact_label(token) {
            return ChunkOutcome::EquipmentLabelMismatch;
        }
        if facet == self.config.observation_facet {
            return ChunkOutcome::ObservationFacet;
        }

        let facet_label = self.resolver.facet_label(&facet);
        keywords.push(Keyword::new(
            token,
            chunk.start,
            chunk.end,
            facet,
            facet_label,
        ));
        ChunkOutcome::Accepted
    }

    /// Look a term up, applying the stoplist to the term and to the primary label.
    async fn lookup_term(&self, term: &str) -> Option<Vocab> {
        if self.is_stopword(term) {
            return None;
        }

        let vocab = match self.vocabulary.lookup(term).await {
            Ok(Some(vocab)) if !vocab.is_empty() => vocab,
            Ok(_) => return None,
            Err(e) => {
                tracing::debug!("Vocabulary lookup failed for {:?}: {}", term, e);
                return None;
            }
        };

        if vocab.primary_label().is_some_and(|label| self.is_stopword(label)) {
            return None;
        }
        Some(vocab)
    }

    /// Pick the concept to classify: the first one, after dropping
    /// deny-listed identifiers when the match is ambiguous.
    fn select_concept(&self, vocab: Vocab) -> Option<Concept> {
        let mut concepts = vocab.concepts;
        if concepts.len() > 1 {
            concepts.retain(|c| !self.null_iris.contains(c.iri()));
        }
        concepts.into_iter().next()
    }

    fn is_stopword(&self, term: &str) -> bool {
        self.stoplist.contains(&term.to_lowercase())
    }
}
