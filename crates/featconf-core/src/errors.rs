use thiserror::Error;

/// Result type alias using FeatConfError
pub type Result<T> = std::result::Result<T, FeatConfError>;

/// Comprehensive error taxonomy for FeatConf operations
///
/// Validation violations are deliberately NOT part of this taxonomy: they are
/// advisory, recomputed in full on every selection change, and carried as a
/// first-class `ValidationError` list next to the selection state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatConfError {
    // ===== Input Errors =====
    /// A required input was absent before the action was triggered
    #[error("Please select a {what} before continuing.")]
    MissingInput { what: String },

    // ===== Collaborator Errors =====
    /// A collaborator service answered with an explicit error payload
    ///
    /// The message is surfaced verbatim to the user.
    #[error("{message}")]
    Collaborator { message: String },

    /// Talking to a collaborator failed at the transport or parse level
    ///
    /// Distinct from `Collaborator`: the service never produced a usable
    /// answer, so the message is generic and the action can be retried.
    #[error("An unexpected error occurred. Please try again. ({message})")]
    Transport { message: String },

    // ===== Registry Errors =====
    /// A constraint add is already awaiting confirmation or manual entry
    #[error("A constraint translation is already pending; resolve it first")]
    TranslationPending,

    /// Confirm/reject was called with no proposal awaiting confirmation
    #[error("No constraint translation is awaiting confirmation")]
    NoPendingTranslation,

    /// Manual entry was submitted with no constraint awaiting manual entry
    #[error("No constraint is awaiting a manual translation")]
    NoManualPending,

    /// Constraint not found in the registry
    #[error("Constraint not found: {constraint_id}")]
    ConstraintNotFound { constraint_id: String },

    // ===== Session Errors =====
    /// No model has been visualized yet, so there is nothing to configure
    #[error("No feature model is loaded; visualize a model first")]
    ModelNotLoaded,

    /// There is no upload waiting for constraint translations to complete
    #[error("No upload is awaiting constraint translation")]
    NoPendingUpload,

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Local I/O error (reading the model file for upload)
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl FeatConfError {
    /// Shorthand for `MissingInput`
    pub fn missing_input(what: impl Into<String>) -> Self {
        FeatConfError::MissingInput { what: what.into() }
    }

    /// True for transport-level failures that a fresh user action may resolve
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeatConfError::Transport { .. })
    }
}

/// Conversion from serde_json::Error to FeatConfError
impl From<serde_json::Error> for FeatConfError {
    fn from(err: serde_json::Error) -> Self {
        FeatConfError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for FeatConfError {
    fn from(err: std::io::Error) -> Self {
        FeatConfError::Io {
            message: err.to_string(),
        }
    }
}
