//! Configuration settings for keyfacet.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub vocabulary: VocabularyConfig,
    pub pipeline: PipelineConfig,
    pub ontology: OntologyConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.pipeline.load_stoplist_file()?;
        config.pipeline.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("keyfacet.toml"),
            PathBuf::from("config.toml"),
            dirs::config_dir()
                .map(|p| p.join("keyfacet/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.service.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("service.base_url".to_string()).into());
        }
        if self.vocabulary.limit == 0 {
            return Err(ConfigError::Invalid("vocabulary.limit must be > 0".to_string()).into());
        }
        if self.pipeline.equipment_facet.is_empty() {
            return Err(ConfigError::MissingField("pipeline.equipment_facet".to_string()).into());
        }
        if self.pipeline.observation_facet.is_empty() {
            return Err(
                ConfigError::MissingField("pipeline.observation_facet".to_string()).into(),
            );
        }
        if self.pipeline.candidate_pos_tags.is_empty() {
            return Err(ConfigError::Invalid(
                "pipeline.candidate_pos_tags must not be empty".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Remote service endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the SciGraph service (lexical and vocabulary endpoints live below it)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://tikki.neuinfo.org:9000/scigraph".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Vocabulary term search flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Maximum number of concepts returned per lookup
    pub limit: usize,
    pub search_synonyms: bool,
    pub search_abbreviations: bool,
    pub search_acronyms: bool,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            search_synonyms: true,
            search_abbreviations: false,
            search_acronyms: false,
        }
    }
}

/// Keyword pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Strings that are never looked up (compared lowercase)
    pub stoplist: Vec<String>,
    /// Optional file with additional stoplist entries, one per line
    pub stoplist_path: Option<PathBuf>,
    /// Concept IRIs discarded when a lookup is ambiguous
    pub null_iris: Vec<String>,
    /// Token to IRI overrides. Carried through to the pipeline but not consulted yet.
    pub exception_map: BTreeMap<String, String>,
    /// POS tags whose sub-tokens are retried after a chunk fails
    pub candidate_pos_tags: Vec<String>,
    /// Facet whose matches require an exact label match
    pub equipment_facet: String,
    /// Facet that is never accepted as a keyword classification
    pub observation_facet: String,
    /// Identifier fragment marking chemical-entity concepts
    pub chemical_namespace: String,
    /// Tokens this short or shorter are rejected when matched to a chemical entity
    pub chemical_guard_max_len: usize,
    /// Prefix the document title to the body text before extraction
    pub include_title: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stoplist: Vec::new(),
            stoplist_path: None,
            null_iris: Vec::new(),
            exception_map: BTreeMap::new(),
            candidate_pos_tags: ["NN", "NNP", "NNPS", "NNS", "JJ"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            equipment_facet: "http://sweet.jpl.nasa.gov/2.3/matrEquipment.owl#Equipment"
                .to_string(),
            observation_facet:
                "http://hydro10.sdsc.edu/cinergi_ontology/observation#Observation".to_string(),
            chemical_namespace: "CHEBI".to_string(),
            chemical_guard_max_len: 3,
            include_title: true,
        }
    }
}

impl PipelineConfig {
    /// Append entries from `stoplist_path`, if set.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_stoplist_file(&mut self) -> Result<()> {
        let Some(path) = &self.stoplist_path else {
            return Ok(());
        };
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string);
        self.stoplist.extend(entries);
        Ok(())
    }

    /// Lowercase and deduplicate the stoplist.
    pub fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.stoplist = self
            .stoplist
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();
    }
}

/// Ontology configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OntologyConfig {
    /// JSON class file loaded by the in-memory ontology
    pub path: Option<PathBuf>,
    /// The universal top class, never classified
    pub top_class: String,
    /// Maximum number of memoized facet walks
    pub facet_cache_capacity: u64,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            path: None,
            top_class: "http://www.w3.org/2002/07/owl#Thing".to_string(),
            facet_cache_capacity: 10_000,
        }
    }
}
