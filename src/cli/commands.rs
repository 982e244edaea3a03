//! Command handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use keyfacet::{
    BatchReport, Config, Document, FacetResolver, InMemoryOntology, KeywordPipeline,
};
use serde::Serialize;

/// Result of resolving a single class.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub class: String,
    pub known_class: bool,
    pub facet: Option<String>,
    pub facet_label: Option<String>,
}

/// Pick the ontology file: the command-line flag wins over the config file.
fn ontology_path(config: &Config, flag: Option<PathBuf>) -> Result<PathBuf> {
    flag.or_else(|| config.ontology.path.clone())
        .context("no ontology given: pass --ontology or set ontology.path in the config")
}

fn load_ontology(path: &Path) -> Result<InMemoryOntology> {
    InMemoryOntology::from_file(path)
        .with_context(|| format!("failed to load ontology {}", path.display()))
}

/// Read a JSON array of documents.
pub async fn read_documents(path: &Path) -> Result<Vec<Document>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let documents: Vec<Document> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of documents", path.display()))?;
    Ok(documents)
}

/// Run the extraction pipeline over a document file.
pub async fn extract(
    config: Config,
    ontology: Option<PathBuf>,
    input: PathBuf,
    output: Option<PathBuf>,
) -> Result<BatchReport> {
    let ontology = load_ontology(&ontology_path(&config, ontology)?)?;
    let documents = read_documents(&input).await?;
    tracing::info!("Read {} documents from {}", documents.len(), input.display());

    let pipeline = KeywordPipeline::from_config(&config, Arc::new(ontology))?;
    let report = pipeline.process_documents(&documents).await;

    let json = serde_json::to_string_pretty(&report.outputs)?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {} outputs to {}", report.documents(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(report)
}

/// Resolve the facet of one class.
pub fn resolve(config: &Config, ontology: Option<PathBuf>, class: String) -> Result<ResolveResponse> {
    let ontology = Arc::new(load_ontology(&ontology_path(config, ontology)?)?);
    let known_class = ontology.get(&class).is_some();
    let resolver = FacetResolver::from_config(ontology, &config.ontology);

    let facet = resolver.resolve(&class);
    let facet_label = facet.as_deref().map(|f| resolver.facet_label(f));

    Ok(ResolveResponse {
        class,
        known_class,
        facet,
        facet_label,
    })
}
