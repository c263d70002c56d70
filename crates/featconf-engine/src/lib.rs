//! FeatConf Engine - Session orchestration layer
//!
//! Coordinates the configuration core and the collaborator boundary: one
//! explicit session state object with method-per-event transitions, so the
//! whole upload → translate → visualize → toggle flow is testable without
//! any rendering layer.

pub mod session;

pub use session::{ConstraintPrompt, LoadedModel, Session, UploadStatus};
