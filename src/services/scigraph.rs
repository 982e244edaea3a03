//! HTTP client for SciGraph's lexical and vocabulary endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{ServiceConfig, VocabularyConfig};
use crate::error::{Result, ServiceError};
use crate::services::{Chunk, LexicalService, PartOfSpeech, Vocab, VocabularyService};

/// SciGraph REST client implementing both service traits.
#[derive(Debug, Clone)]
pub struct SciGraphClient {
    client: Client,
    base_url: Url,
    vocabulary: VocabularyConfig,
}

impl SciGraphClient {
    /// Create a client from configuration.
    pub fn from_config(service: &ServiceConfig, vocabulary: &VocabularyConfig) -> Result<Self> {
        Self::new(&service.base_url, service.timeout_secs, vocabulary.clone())
    }

    /// Create a client with explicit parameters.
    pub fn new(base_url: &str, timeout_secs: u64, vocabulary: VocabularyConfig) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(base_url.to_string()).into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ServiceError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            vocabulary,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServiceError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn chunks_url(&self, text: &str) -> Result<Url> {
        let mut url = self.endpoint(&["lexical", "chunks"])?;
        url.query_pairs_mut().append_pair("text", text);
        Ok(url)
    }

    fn pos_url(&self, text: &str) -> Result<Url> {
        let mut url = self.endpoint(&["lexical", "pos"])?;
        url.query_pairs_mut().append_pair("text", text);
        Ok(url)
    }

    fn term_url(&self, term: &str) -> Result<Url> {
        let mut url = self.endpoint(&["vocabulary", "term", term])?;
        url.query_pairs_mut()
            .append_pair("limit", &self.vocabulary.limit.to_string())
            .append_pair("searchSynonyms", &self.vocabulary.search_synonyms.to_string())
            .append_pair(
                "searchAbbreviations",
                &self.vocabulary.search_abbreviations.to_string(),
            )
            .append_pair("searchAcronyms", &self.vocabulary.search_acronyms.to_string());
        Ok(url)
    }

    /// GET a JSON document. Returns `Ok(None)` for 404 and 406.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        let response = self
            .client
            .get(url.clone())
            .header("Content-Type", "application/json;charset=utf-8")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout(url.to_string())
                } else if e.is_connect() {
                    ServiceError::Transport(format!("Connection failed: {}", e))
                } else {
                    ServiceError::Transport(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(format!("Failed to read response: {}", e)))?;
        parse_body(&body).map(Some)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()).into())
}

#[async_trait]
impl LexicalService for SciGraphClient {
    async fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        let url = self.chunks_url(text)?;
        Ok(self.get_json(url).await?.unwrap_or_default())
    }

    async fn pos(&self, text: &str) -> Result<Vec<PartOfSpeech>> {
        let url = self.pos_url(text)?;
        Ok(self.get_json(url).await?.unwrap_or_default())
    }
}

#[async_trait]
impl VocabularyService for SciGraphClient {
    async fn lookup(&self, term: &str) -> Result<Option<Vocab>> {
        let url = self.term_url(term)?;
        let vocab: Option<Vocab> = self.get_json(url).await?;
        Ok(vocab.filter(|v| !v.is_empty()))
    }
}
