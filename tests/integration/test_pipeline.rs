//! End-to-end pipeline tests.

use std::sync::Arc;

use keyfacet::config::PipelineConfig;
use keyfacet::{Chunk, Concept, Document, Keyword, PartOfSpeech};

use crate::common::{iri, pipeline, FakeLexical, FakeVocabulary, EQUIPMENT, OBSERVATION};

#[tokio::test]
async fn test_single_chunk_keyword() {
    let lexical = FakeLexical::default()
        .with_chunks("rain gauge", vec![Chunk::new("rain gauge", 0, 10)]);
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("rain gauge", Concept::new(iri("RainGauge"), ["rain gauge"])),
    );
    let p = pipeline(lexical, vocab, PipelineConfig::default());

    let keywords = p.process("rain gauge").await.unwrap();
    assert_eq!(
        keywords,
        vec![Keyword::new("rain gauge", 0, 10, iri("Instrument"), "Instrument")]
    );
}

#[tokio::test]
async fn test_hyphenated_compound_keeps_chunk_span() {
    let text = "measured the ocean-surface";
    let lexical = FakeLexical::default()
        .with_chunks(text, vec![Chunk::new("ocean-surface", 13, 26)])
        .with_tags("ocean-surface", vec![PartOfSpeech::new("ocean-surface", "JJ")]);
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("ocean surface", Concept::new(iri("OceanSurface"), ["ocean surface"])),
    );
    let p = pipeline(lexical, vocab.clone(), PipelineConfig::default());

    let keywords = p.process(text).await.unwrap();
    assert_eq!(
        keywords,
        vec![Keyword::new("ocean surface", 13, 26, iri("Realm"), "Realm")]
    );
    // Direct lookup of the chunk, then the space-joined retry.
    assert_eq!(vocab.call_count(), 2);
}

#[tokio::test]
async fn test_stoplisted_token_yields_nothing() {
    let lexical = FakeLexical::default()
        .with_chunks("Rain Gauge", vec![Chunk::new("Rain Gauge", 0, 10)])
        .with_tags("Rain Gauge", vec![PartOfSpeech::new("Rain Gauge", "NNP")]);
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("Rain Gauge", Concept::new(iri("RainGauge"), ["rain gauge"])),
    );
    let config = PipelineConfig {
        stoplist: vec!["rain gauge".to_string()],
        ..PipelineConfig::default()
    };
    let p = pipeline(lexical, vocab.clone(), config);

    let keywords = p.process("Rain Gauge").await.unwrap();
    assert!(keywords.is_empty());
    assert_eq!(vocab.call_count(), 0);
}

#[tokio::test]
async fn test_duplicate_chunks_produce_one_keyword() {
    let text = "rain gauge next to another rain gauge";
    let lexical = FakeLexical::default().with_chunks(
        text,
        vec![Chunk::new("rain gauge", 0, 10), Chunk::new("rain gauge", 27, 37)],
    );
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("rain gauge", Concept::new(iri("RainGauge"), ["rain gauge"])),
    );
    let p = pipeline(lexical, vocab.clone(), PipelineConfig::default());

    let keywords = p.process(text).await.unwrap();
    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].span, [0, 10]);
    assert_eq!(vocab.call_count(), 1);
}

#[tokio::test]
async fn test_override_rules() {
    let text = "sampler observation gauge";
    let lexical = FakeLexical::default().with_chunks(
        text,
        vec![
            Chunk::new("sampler", 0, 7),
            Chunk::new("observation", 8, 19),
            Chunk::new("gauge", 20, 25),
        ],
    );
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("sampler", Concept::new(EQUIPMENT, ["Sampler"]))
            .with_term("observation", Concept::new(OBSERVATION, ["observation"]))
            .with_term("gauge", Concept::new(iri("Gauge"), ["gauge"])),
    );
    let p = pipeline(lexical, vocab, PipelineConfig::default());

    let keywords = p.process(text).await.unwrap();
    assert_eq!(
        keywords,
        vec![Keyword::new("gauge", 20, 25, iri("Instrument"), "Instrument")]
    );
}

#[tokio::test]
async fn test_batch_continues_past_empty_and_failing_documents() {
    let lexical = FakeLexical::default()
        .with_chunks("Gauges rain gauge", vec![Chunk::new("rain gauge", 7, 17)])
        .with_chunks("Nothing here", vec![Chunk::new("Nothing", 0, 7)]);
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("rain gauge", Concept::new(iri("RainGauge"), ["rain gauge"])),
    );
    let p = pipeline(lexical, vocab, PipelineConfig::default());

    let documents = vec![
        Document::new("empty", "Nothing", "here"),
        // The fake has no chunks for this text, so chunking fails.
        Document::new("broken", "Unchunkable", "text"),
        Document::new("gauge", "Gauges", "rain gauge"),
    ];
    let report = p.process_documents(&documents).await;

    assert_eq!(report.documents(), 3);
    assert_eq!(report.no_keywords, vec!["empty", "broken"]);
    assert_eq!(report.keywords_found(), 1);

    let ids: Vec<&str> = report.outputs.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["empty", "broken", "gauge"]);

    let output = &report.outputs[2];
    assert_eq!(output.title, "Gauges");
    assert_eq!(output.text, "rain gauge");
    assert_eq!(output.keywords[0].span, [7, 17]);
    assert_eq!(report.with_keywords().count(), 1);
}

#[tokio::test]
async fn test_title_can_be_excluded() {
    let lexical = FakeLexical::default()
        .with_chunks("rain gauge", vec![Chunk::new("rain gauge", 0, 10)]);
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("rain gauge", Concept::new(iri("RainGauge"), ["rain gauge"])),
    );
    let config = PipelineConfig {
        include_title: false,
        ..PipelineConfig::default()
    };
    let p = pipeline(lexical, vocab, config);

    let output = p
        .process_document(&Document::new("d1", "Ignored title", "rain gauge"))
        .await;
    assert_eq!(output.keywords.len(), 1);
}

#[tokio::test]
async fn test_output_json_shape() {
    let lexical = FakeLexical::default()
        .with_chunks("rain gauge", vec![Chunk::new("rain gauge", 0, 10)]);
    let vocab = Arc::new(
        FakeVocabulary::default()
            .with_term("rain gauge", Concept::new(iri("RainGauge"), ["rain gauge"])),
    );
    let config = PipelineConfig {
        include_title: false,
        ..PipelineConfig::default()
    };
    let p = pipeline(lexical, vocab, config);

    let output = p
        .process_document(&Document::new("d1", "Title", "rain gauge"))
        .await;
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["id"], "d1");
    assert_eq!(json["keyword"][0]["text"], "rain gauge");
    assert_eq!(json["keyword"][0]["span"], serde_json::json!([0, 10]));
    assert_eq!(json["keyword"][0]["facet"], iri("Instrument"));
    assert_eq!(json["keyword"][0]["facet_label"], "Instrument");
}
