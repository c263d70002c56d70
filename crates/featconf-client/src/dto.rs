//! Wire DTOs for the collaborator endpoints
//!
//! Responses are deserialized leniently (every field optional) and then
//! classified: an `error` payload wins over everything else, a recognized
//! shape maps to a typed outcome, and anything else is a transport-level
//! malformation.

use serde::Deserialize;
use std::collections::BTreeMap;

use featconf_core::errors::{FeatConfError, Result};
use featconf_core::model::{Constraint, FeatureNode, ModelMetadata};
use featconf_core::registry::TranslationProposal;

/// Result of a successful formula-generation run
#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifacts {
    /// Full propositional logic formula, if the generator produced one
    pub logic_formula: Option<String>,
    /// Minimum working products as feature-name sets
    pub minimum_working_products: Vec<Vec<String>>,
    /// The constraint list as the generator saw it
    pub constraints: Vec<Constraint>,
}

/// Three-way outcome of an upload
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The model parsed but some constraints still need translation
    NeedsTranslation {
        model: FeatureNode,
        untranslated_constraints: Vec<Constraint>,
    },
    /// Formula generation completed in one pass
    Complete(ModelArtifacts),
}

/// Result of an MWP enumeration run
#[derive(Debug, Clone, PartialEq)]
pub struct MwpResult {
    pub minimum_working_products: Vec<Vec<String>>,
    pub constraints: Vec<Constraint>,
}

/// Tree plus selection rules, ready for interactive configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Visualization {
    pub model: FeatureNode,
    pub metadata: ModelMetadata,
}

fn malformed(what: &str) -> FeatConfError {
    FeatConfError::Transport {
        message: format!("malformed {} response", what),
    }
}

/// Raw `upload` payload
#[derive(Debug, Deserialize)]
pub struct RawUploadResponse {
    pub error: Option<String>,
    pub status: Option<String>,
    pub model: Option<FeatureNode>,
    pub untranslated_constraints: Option<Vec<Constraint>>,
    pub logic_formula: Option<String>,
    pub minimum_working_products: Option<Vec<Vec<String>>>,
    pub constraints: Option<Vec<Constraint>>,
}

impl RawUploadResponse {
    /// Classify into the three-way upload outcome
    ///
    /// # Errors
    ///
    /// `Collaborator` for an error payload, `Transport` when the
    /// needs-translation shape is missing its model.
    pub fn classify(self) -> Result<UploadOutcome> {
        if let Some(message) = self.error {
            return Err(FeatConfError::Collaborator { message });
        }

        if self.status.as_deref() == Some("needs_translation") {
            let model = self.model.ok_or_else(|| malformed("upload"))?;
            return Ok(UploadOutcome::NeedsTranslation {
                model,
                untranslated_constraints: self.untranslated_constraints.unwrap_or_default(),
            });
        }

        Ok(UploadOutcome::Complete(ModelArtifacts {
            logic_formula: self.logic_formula,
            minimum_working_products: self.minimum_working_products.unwrap_or_default(),
            constraints: self.constraints.unwrap_or_default(),
        }))
    }
}

/// Raw `completeTranslation` payload
#[derive(Debug, Deserialize)]
pub struct RawCompletionResponse {
    pub error: Option<String>,
    pub logic_formula: Option<String>,
    pub minimum_working_products: Option<Vec<Vec<String>>>,
    pub constraints: Option<Vec<Constraint>>,
}

impl RawCompletionResponse {
    pub fn classify(self) -> Result<ModelArtifacts> {
        if let Some(message) = self.error {
            return Err(FeatConfError::Collaborator { message });
        }
        Ok(ModelArtifacts {
            logic_formula: self.logic_formula,
            minimum_working_products: self.minimum_working_products.unwrap_or_default(),
            constraints: self.constraints.unwrap_or_default(),
        })
    }
}

/// Raw `findMwp` payload
#[derive(Debug, Deserialize)]
pub struct RawMwpResponse {
    pub error: Option<String>,
    pub minimum_working_products: Option<Vec<Vec<String>>>,
    pub constraints: Option<Vec<Constraint>>,
}

impl RawMwpResponse {
    pub fn classify(self) -> Result<MwpResult> {
        if let Some(message) = self.error {
            return Err(FeatConfError::Collaborator { message });
        }
        Ok(MwpResult {
            minimum_working_products: self.minimum_working_products.unwrap_or_default(),
            constraints: self.constraints.unwrap_or_default(),
        })
    }
}

/// Raw `visualize` payload
#[derive(Debug, Deserialize)]
pub struct RawVisualizationResponse {
    pub error: Option<String>,
    pub visualization_model: Option<FeatureNode>,
    pub xor_groups: Option<Vec<Vec<String>>>,
    pub mandatory_features: Option<Vec<String>>,
    pub dependencies: Option<BTreeMap<String, Vec<String>>>,
}

impl RawVisualizationResponse {
    pub fn classify(self) -> Result<Visualization> {
        if let Some(message) = self.error {
            return Err(FeatConfError::Collaborator { message });
        }
        let model = self.visualization_model.ok_or_else(|| malformed("visualization"))?;
        Ok(Visualization {
            model,
            metadata: ModelMetadata {
                mandatory_features: self.mandatory_features.unwrap_or_default(),
                xor_groups: self.xor_groups.unwrap_or_default(),
                dependencies: self.dependencies.unwrap_or_default(),
            },
        })
    }
}

/// Raw `translateConstraint` payload
#[derive(Debug, Deserialize)]
pub struct RawTranslationResponse {
    pub error: Option<String>,
    #[serde(rename = "booleanExpression")]
    pub boolean_expression: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl RawTranslationResponse {
    pub fn classify(self) -> Result<TranslationProposal> {
        if let Some(message) = self.error {
            return Err(FeatConfError::Collaborator { message });
        }
        let boolean_expression = self.boolean_expression.ok_or_else(|| malformed("translation"))?;
        Ok(TranslationProposal {
            boolean_expression,
            kind: self.kind,
        })
    }
}
