//! FeatConf Core - Feature-model configuration kernel
//!
//! This crate provides the domain logic for interactive feature-model
//! configuration:
//! - Feature tree model (features, XOR/OR groups) matching the collaborator
//!   wire shape
//! - Traversal operations (name extraction, parent lookup, descendants)
//! - The selection transition function and advisory validation rules
//! - The cross-tree constraint registry with its pending-translation flow
//!
//! No I/O happens here; collaborator boundaries live in `featconf-client`.

pub mod apply;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod registry;
pub mod rules;
pub mod traversal;

// Re-export commonly used types
pub use apply::toggle_feature;
pub use errors::{FeatConfError, Result};
pub use model::{
    Constraint, FeatureChild, FeatureGroup, FeatureNode, GroupType, ModelMetadata, SelectionState,
};
pub use registry::{ConstraintRegistry, ConstraintTranslator, PendingAdd, TranslationProposal};
pub use rules::{validate_selection, ValidationError};
