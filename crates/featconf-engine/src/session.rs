//! Configuration session state machine
//!
//! A `Session` owns everything the UI would otherwise keep in ambient
//! mutable state: the chosen input file, the generated artifacts, the
//! pending-translation model, the constraint registry, the visualized tree
//! with its rules, and the live selection. Every operation runs to
//! completion before the next is accepted; the blocking collaborator calls
//! are the only suspension points.
//!
//! Error routing follows the collaborator discipline: an explicit error
//! payload from `upload` resets the derived state to the pre-action
//! baseline and surfaces the message verbatim; transport failures surface
//! a generic retry-able report and leave state untouched. Failures are
//! surfaced once; retrying takes a fresh call.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use featconf_client::dto::ModelArtifacts;
use featconf_client::service::{ModelService, ServiceTranslator};
use featconf_client::UploadOutcome;
use featconf_core::errors::{FeatConfError, Result};
use featconf_core::model::{Constraint, FeatureNode, ModelMetadata, SelectionState};
use featconf_core::registry::{ConstraintRegistry, PendingAdd, ProposalSource};
use featconf_core::rules::ValidationError;
use featconf_core::traversal::extract_feature_names;
use featconf_core::toggle_feature;

/// A visualized tree together with its selection rules
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    pub tree: FeatureNode,
    pub metadata: ModelMetadata,
}

/// Outcome of an upload, as the caller needs to route it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    /// Constraints await translation before the formula can be generated
    NeedsTranslation { untranslated: usize },
    /// Formula generation completed in one pass
    Complete,
}

/// What the caller must ask the user after starting a constraint add
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintPrompt {
    /// An identical statement already has this translation; reuse it?
    ConfirmReuse { boolean_expression: String },
    /// The translation service proposes this expression; accept it?
    ConfirmTranslation { boolean_expression: String },
    /// Automatic translation failed; ask for a manual expression
    ManualEntry,
}

/// One interactive configuration session over a collaborator service
#[derive(Debug)]
pub struct Session<S: ModelService> {
    service: S,
    file: Option<PathBuf>,
    logic_formula: Option<String>,
    mwp_list: Vec<Vec<String>>,
    pending_model: Option<FeatureNode>,
    registry: ConstraintRegistry,
    available_features: Vec<String>,
    loaded: Option<LoadedModel>,
    selection: SelectionState,
    validation_errors: Vec<ValidationError>,
}

impl<S: ModelService> Session<S> {
    /// Create a session over the given collaborator service
    pub fn new(service: S) -> Self {
        Self {
            service,
            file: None,
            logic_formula: None,
            mwp_list: Vec::new(),
            pending_model: None,
            registry: ConstraintRegistry::new(),
            available_features: Vec::new(),
            loaded: None,
            selection: SelectionState::new(),
            validation_errors: Vec::new(),
        }
    }

    /// Choose the model file, dropping everything derived from the previous one
    pub fn set_file(&mut self, file: impl Into<PathBuf>) {
        self.file = Some(file.into());
        self.reset_derived();
    }

    fn reset_derived(&mut self) {
        self.logic_formula = None;
        self.mwp_list.clear();
        self.pending_model = None;
        self.registry.clear();
        self.available_features.clear();
        self.validation_errors.clear();
    }

    fn require_file(&self) -> Result<&Path> {
        self.file
            .as_deref()
            .ok_or_else(|| FeatConfError::missing_input("file"))
    }

    fn apply_artifacts(&mut self, artifacts: ModelArtifacts) {
        self.logic_formula = artifacts.logic_formula;
        self.mwp_list = artifacts.minimum_working_products;
        self.registry.replace_all(artifacts.constraints);
        self.pending_model = None;
    }

    /// Upload the chosen file for parsing and formula generation
    ///
    /// # Errors
    ///
    /// `MissingInput` without a file. A `Collaborator` error resets the
    /// derived state to the pre-action baseline before propagating; a
    /// `Transport` failure propagates with state untouched.
    pub fn upload(&mut self) -> Result<UploadStatus> {
        let file = self.require_file()?.to_path_buf();
        info!(file = %file.display(), "uploading model");

        match self.service.upload(&file) {
            Ok(UploadOutcome::NeedsTranslation {
                model,
                untranslated_constraints,
            }) => {
                let untranslated = untranslated_constraints.len();
                self.available_features = extract_feature_names(&model);
                self.registry.replace_all(untranslated_constraints);
                self.pending_model = Some(model);
                self.logic_formula = None;
                self.mwp_list.clear();
                info!(untranslated, "upload needs constraint translation");
                Ok(UploadStatus::NeedsTranslation { untranslated })
            }
            Ok(UploadOutcome::Complete(artifacts)) => {
                self.apply_artifacts(artifacts);
                info!("upload complete");
                Ok(UploadStatus::Complete)
            }
            Err(err @ FeatConfError::Collaborator { .. }) => {
                self.reset_derived();
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Finish formula generation with the registry's current constraints
    ///
    /// # Errors
    ///
    /// `NoPendingUpload` unless an upload is awaiting translation; service
    /// failures propagate with the pending state kept for another attempt.
    pub fn complete_translations(&mut self) -> Result<()> {
        let model = self
            .pending_model
            .as_ref()
            .ok_or(FeatConfError::NoPendingUpload)?;

        let artifacts = self
            .service
            .complete_translation(model, self.registry.constraints())?;
        self.apply_artifacts(artifacts);
        info!("translations completed, formula generated");
        Ok(())
    }

    /// Enumerate minimum working products for the chosen file
    pub fn find_mwp(&mut self) -> Result<&[Vec<String>]> {
        let file = self.require_file()?.to_path_buf();
        let result = self.service.find_mwp(&file)?;
        self.mwp_list = result.minimum_working_products;
        Ok(&self.mwp_list)
    }

    /// Load the tree and its selection rules for interactive configuration
    ///
    /// Starts a fresh selection; a failure leaves any previously loaded
    /// model and selection intact.
    pub fn visualize(&mut self) -> Result<&LoadedModel> {
        let file = self.require_file()?.to_path_buf();
        let visualization = self.service.visualize(&file)?;

        self.available_features = extract_feature_names(&visualization.model);
        self.selection = SelectionState::new();
        self.validation_errors = Vec::new();
        info!(features = self.available_features.len(), "model visualized");

        Ok(self.loaded.insert(LoadedModel {
            tree: visualization.model,
            metadata: visualization.metadata,
        }))
    }

    /// Toggle one feature, recomputing the consistent selection and errors
    ///
    /// # Errors
    ///
    /// `ModelNotLoaded` before a successful `visualize`.
    pub fn toggle_feature(&mut self, feature: &str, selected: bool) -> Result<&[ValidationError]> {
        let loaded = self.loaded.as_ref().ok_or(FeatConfError::ModelNotLoaded)?;

        let current = std::mem::take(&mut self.selection);
        let (selection, errors) =
            toggle_feature(current, feature, selected, &loaded.tree, &loaded.metadata);
        debug!(feature, selected, violations = errors.len(), "selection updated");

        self.selection = selection;
        self.validation_errors = errors;
        Ok(&self.validation_errors)
    }

    /// Start adding a cross-tree constraint from an English statement
    ///
    /// # Errors
    ///
    /// See [`ConstraintRegistry::begin_add`]; transport failures leave the
    /// registry idle so the user can simply try again.
    pub fn add_constraint(&mut self, statement: &str) -> Result<ConstraintPrompt> {
        let translator = ServiceTranslator(&self.service);
        let pending =
            self.registry
                .begin_add(statement, &self.available_features, &translator)?;

        Ok(match pending {
            PendingAdd::Proposed {
                boolean_expression,
                source: ProposalSource::ReuseExisting,
                ..
            } => ConstraintPrompt::ConfirmReuse {
                boolean_expression: boolean_expression.clone(),
            },
            PendingAdd::Proposed {
                boolean_expression, ..
            } => ConstraintPrompt::ConfirmTranslation {
                boolean_expression: boolean_expression.clone(),
            },
            PendingAdd::ManualPending { .. } => ConstraintPrompt::ManualEntry,
        })
    }

    /// Accept the proposed translation, appending the constraint
    pub fn confirm_constraint(&mut self) -> Result<&Constraint> {
        self.registry.confirm_pending()
    }

    /// Reject the proposal; the caller should prompt for manual entry next
    pub fn reject_constraint(&mut self) -> Result<()> {
        self.registry.reject_pending()
    }

    /// Supply (or skip, with `None`) the manual expression
    pub fn manual_constraint(&mut self, expression: Option<&str>) -> Result<&Constraint> {
        self.registry.complete_manual(expression)
    }

    /// Resolve an existing untranslated constraint with a user-supplied expression
    pub fn translate_manually(&mut self, id: &str, expression: &str) -> Result<()> {
        self.registry.set_expression(id, expression)
    }

    // ===== Accessors =====

    /// The chosen model file, if any
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The generated propositional formula, if one was produced
    pub fn logic_formula(&self) -> Option<&str> {
        self.logic_formula.as_deref()
    }

    /// The last MWP enumeration result
    pub fn mwp_list(&self) -> &[Vec<String>] {
        &self.mwp_list
    }

    /// True while an upload is parked awaiting constraint translation
    pub fn is_awaiting_translation(&self) -> bool {
        self.pending_model.is_some()
    }

    /// Feature names extracted from the current model
    pub fn available_features(&self) -> &[String] {
        &self.available_features
    }

    /// The visualized model, once loaded
    pub fn loaded(&self) -> Option<&LoadedModel> {
        self.loaded.as_ref()
    }

    /// The live selection
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Violations of the current selection, recomputed on every toggle
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    /// The constraint registry
    pub fn registry(&self) -> &ConstraintRegistry {
        &self.registry
    }
}
