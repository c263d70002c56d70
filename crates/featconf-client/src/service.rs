//! The collaborator service seam
//!
//! `ModelService` is the narrow interface the session layer depends on. The
//! blocking HTTP implementation lives in [`crate::http`]; tests substitute
//! scripted stubs.

use std::path::Path;

use featconf_core::errors::Result;
use featconf_core::model::{Constraint, FeatureNode};
use featconf_core::registry::{ConstraintTranslator, TranslationProposal};

use crate::dto::{ModelArtifacts, MwpResult, UploadOutcome, Visualization};

/// Synchronous request/response boundary to the model collaborators
pub trait ModelService {
    /// Upload a model file for parsing and formula generation
    ///
    /// # Errors
    ///
    /// `Collaborator` for service error payloads, `Transport` for
    /// network/parse failures, `Io` when the file cannot be read.
    fn upload(&self, file: &Path) -> Result<UploadOutcome>;

    /// Finish formula generation for a model held since upload, with the
    /// (possibly manually translated) constraint list
    fn complete_translation(
        &self,
        model: &FeatureNode,
        constraints: &[Constraint],
    ) -> Result<ModelArtifacts>;

    /// Enumerate minimum working products for a model file
    fn find_mwp(&self, file: &Path) -> Result<MwpResult>;

    /// Fetch the tree plus selection rules for interactive configuration
    fn visualize(&self, file: &Path) -> Result<Visualization>;

    /// Translate an English constraint statement to a boolean expression
    fn translate_constraint(
        &self,
        english_statement: &str,
        features: &[String],
    ) -> Result<TranslationProposal>;
}

/// Adapter exposing any `ModelService` as the registry's translator seam
pub struct ServiceTranslator<'a, S: ModelService + ?Sized>(pub &'a S);

impl<S: ModelService + ?Sized> ConstraintTranslator for ServiceTranslator<'_, S> {
    fn translate(
        &self,
        english_statement: &str,
        features: &[String],
    ) -> Result<TranslationProposal> {
        self.0.translate_constraint(english_statement, features)
    }
}
