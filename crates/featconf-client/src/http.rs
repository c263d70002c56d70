//! Blocking HTTP implementation of the collaborator boundary
//!
//! Endpoint paths match the reference backend: `/upload`,
//! `/complete-translation`, `/find_mwp`, `/visualization`,
//! `/translate-constraint`. File-based operations post multipart forms;
//! the rest post JSON bodies. Responses are parsed from the body text
//! regardless of HTTP status, since the collaborators report their errors
//! as `{ "error": ... }` payloads on non-2xx statuses too.

use std::path::Path;

use reqwest::blocking::{multipart, Client};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use featconf_core::errors::{FeatConfError, Result};
use featconf_core::model::{Constraint, FeatureNode};
use featconf_core::registry::TranslationProposal;

use crate::dto::{
    ModelArtifacts, MwpResult, RawCompletionResponse, RawMwpResponse, RawTranslationResponse,
    RawUploadResponse, RawVisualizationResponse, UploadOutcome, Visualization,
};
use crate::service::ModelService;

/// HTTP client for the model collaborators
#[derive(Debug, Clone)]
pub struct HttpModelService {
    base_url: String,
    client: Client,
}

impl HttpModelService {
    /// Create a service rooted at the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport(err: impl std::fmt::Display) -> FeatConfError {
        FeatConfError::Transport {
            message: err.to_string(),
        }
    }

    fn post_file<R: DeserializeOwned>(&self, path: &str, file: &Path) -> Result<R> {
        let form = multipart::Form::new()
            .file("file", file)
            .map_err(FeatConfError::from)?;

        debug!(path, file = %file.display(), "posting model file");
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .map_err(Self::transport)?;

        Self::parse_body(response)
    }

    fn post_json<R: DeserializeOwned>(&self, path: &str, body: &serde_json::Value) -> Result<R> {
        debug!(path, "posting JSON request");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(Self::transport)?;

        Self::parse_body(response)
    }

    fn parse_body<R: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<R> {
        let text = response.text().map_err(Self::transport)?;
        serde_json::from_str(&text).map_err(Self::transport)
    }
}

impl ModelService for HttpModelService {
    fn upload(&self, file: &Path) -> Result<UploadOutcome> {
        let raw: RawUploadResponse = self.post_file("/upload", file)?;
        raw.classify()
    }

    fn complete_translation(
        &self,
        model: &FeatureNode,
        constraints: &[Constraint],
    ) -> Result<ModelArtifacts> {
        let body = json!({
            "model": model,
            "constraints": constraints,
        });
        let raw: RawCompletionResponse = self.post_json("/complete-translation", &body)?;
        raw.classify()
    }

    fn find_mwp(&self, file: &Path) -> Result<MwpResult> {
        let raw: RawMwpResponse = self.post_file("/find_mwp", file)?;
        raw.classify()
    }

    fn visualize(&self, file: &Path) -> Result<Visualization> {
        let raw: RawVisualizationResponse = self.post_file("/visualization", file)?;
        raw.classify()
    }

    fn translate_constraint(
        &self,
        english_statement: &str,
        features: &[String],
    ) -> Result<TranslationProposal> {
        let body = json!({
            "englishStatement": english_statement,
            "features": features,
        });
        let raw: RawTranslationResponse = self.post_json("/translate-constraint", &body)?;
        raw.classify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let service = HttpModelService::new("http://localhost:5000/");
        assert_eq!(service.url("/upload"), "http://localhost:5000/upload");
    }

    #[test]
    fn test_unusable_url_maps_to_transport() {
        let service = HttpModelService::new("http://[not-a-host");
        let result = service.translate_constraint("A requires B", &[]);
        assert!(matches!(result, Err(FeatConfError::Transport { .. })));
    }
}
