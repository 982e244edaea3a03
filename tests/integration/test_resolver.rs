//! Facet resolution over a class file loaded from disk.

use std::io::Write;
use std::sync::Arc;

use keyfacet::{FacetResolver, InMemoryOntology};

use crate::common::{iri, ontology, THING};

#[test]
fn test_resolution_over_fixture_ontology() {
    let resolver = FacetResolver::new(Arc::new(ontology()), THING, 100);

    assert_eq!(resolver.resolve(&iri("RainGauge")), Some(iri("Instrument")));
    // OceanSurface <-> SeaSurface is an equivalence cycle.
    assert_eq!(resolver.resolve(&iri("OceanSurface")), Some(iri("Realm")));
    assert_eq!(resolver.resolve(&iri("SeaSurface")), Some(iri("Realm")));
    assert_eq!(resolver.resolve(THING), None);
}

#[test]
fn test_resolution_from_json_file() {
    let json = r#"{
        "classes": [
            {"iri": "http://www.w3.org/2002/07/owl#Thing"},
            {"iri": "http://example.org/Equipment", "label": "Equipment", "facet": true},
            {"iri": "http://example.org/Material", "label": "Material", "facet": true},
            {"iri": "http://example.org/Bottle", "label": "bottle",
             "superclasses": [
                {"kind": "some_values_from", "classes": ["http://example.org/Material"]},
                "http://example.org/Container"
             ]},
            {"iri": "http://example.org/Container", "label": "container",
             "superclasses": ["http://www.w3.org/2002/07/owl#Thing"],
             "parent_annotation": "http://example.org/Equipment"},
            {"iri": "http://example.org/Loop", "superclasses": ["http://example.org/Loop"]}
        ]
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let ontology = InMemoryOntology::from_file(file.path()).unwrap();
    let resolver = FacetResolver::new(Arc::new(ontology), THING, 100);

    assert_eq!(
        resolver.resolve("http://example.org/Bottle").as_deref(),
        Some("http://example.org/Equipment")
    );
    assert_eq!(resolver.resolve("http://example.org/Loop"), None);
    assert_eq!(resolver.facet_label("http://example.org/Equipment"), "Equipment");
}
