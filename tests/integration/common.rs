//! Shared fakes and fixtures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use keyfacet::config::PipelineConfig;
use keyfacet::{
    Chunk, Concept, FacetResolver, InMemoryOntology, KeywordPipeline, LexicalService,
    OntologyClass, PartOfSpeech, Result, ServiceError, Vocab, VocabularyService,
};

pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
pub const EQUIPMENT: &str = "http://sweet.jpl.nasa.gov/2.3/matrEquipment.owl#Equipment";
pub const OBSERVATION: &str = "http://hydro10.sdsc.edu/cinergi_ontology/observation#Observation";

pub fn iri(name: &str) -> String {
    format!("http://example.org/onto#{}", name)
}

/// Lexical service keyed by the exact text it receives.
#[derive(Default)]
pub struct FakeLexical {
    chunks: HashMap<String, Vec<Chunk>>,
    tags: HashMap<String, Vec<PartOfSpeech>>,
}

impl FakeLexical {
    pub fn with_chunks(mut self, text: &str, chunks: Vec<Chunk>) -> Self {
        self.chunks.insert(text.to_string(), chunks);
        self
    }

    pub fn with_tags(mut self, token: &str, tags: Vec<PartOfSpeech>) -> Self {
        self.tags.insert(token.to_string(), tags);
        self
    }
}

#[async_trait]
impl LexicalService for FakeLexical {
    async fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        self.chunks.get(text).cloned().ok_or_else(|| {
            ServiceError::MalformedResponse(format!("no chunks for {:?}", text)).into()
        })
    }

    async fn pos(&self, text: &str) -> Result<Vec<PartOfSpeech>> {
        Ok(self.tags.get(text).cloned().unwrap_or_default())
    }
}

/// Vocabulary that counts lookups.
#[derive(Default)]
pub struct FakeVocabulary {
    terms: HashMap<String, Vec<Concept>>,
    calls: AtomicUsize,
}

impl FakeVocabulary {
    pub fn with_term(mut self, term: &str, concept: Concept) -> Self {
        self.terms.entry(term.to_string()).or_default().push(concept);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VocabularyService for FakeVocabulary {
    async fn lookup(&self, term: &str) -> Result<Option<Vocab>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.terms.get(term).cloned().map(Vocab::new))
    }
}

/// A small earth-science ontology.
pub fn ontology() -> InMemoryOntology {
    InMemoryOntology::new()
        .with_class(OntologyClass::new(THING))
        .with_class(
            OntologyClass::new(iri("Instrument"))
                .with_label("Instrument")
                .with_superclass(THING)
                .as_facet(),
        )
        .with_class(OntologyClass::new(EQUIPMENT).with_label("Equipment").as_facet())
        .with_class(
            OntologyClass::new(OBSERVATION)
                .with_label("Observation")
                .as_facet(),
        )
        .with_class(OntologyClass::new(iri("Realm")).with_label("Realm").as_facet())
        .with_class(
            OntologyClass::new(iri("Gauge"))
                .with_label("gauge")
                .with_superclass(iri("Instrument")),
        )
        .with_class(
            OntologyClass::new(iri("RainGauge"))
                .with_label("rain gauge")
                .with_superclass(iri("Gauge")),
        )
        .with_class(
            OntologyClass::new(iri("OceanSurface"))
                .with_label("ocean surface")
                .with_equivalent(iri("SeaSurface")),
        )
        .with_class(
            OntologyClass::new(iri("SeaSurface"))
                .with_equivalent(iri("OceanSurface"))
                .with_superclass(iri("Realm")),
        )
}

pub fn pipeline(
    lexical: FakeLexical,
    vocabulary: Arc<FakeVocabulary>,
    config: PipelineConfig,
) -> KeywordPipeline {
    let resolver = FacetResolver::new(Arc::new(ontology()), THING, 1000);
    KeywordPipeline::new(Arc::new(lexical), vocabulary, resolver, config)
}
