//! FeatConf Client - Collaborator boundary
//!
//! The configuration core talks to a set of external collaborators over
//! synchronous HTTP/JSON: file upload and formula generation, constraint
//! translation completion, MWP enumeration, visualization, and
//! English-to-boolean constraint translation. This crate owns the wire DTOs,
//! the `ModelService` seam trait, and the blocking HTTP implementation.
//!
//! Error discipline (two distinct kinds):
//! - a response carrying an explicit `error` payload becomes
//!   `FeatConfError::Collaborator`, surfaced verbatim;
//! - a network or parse failure becomes `FeatConfError::Transport`, a
//!   generic retry-able report.
//!
//! There is no retry policy here: a failure is surfaced once and a fresh
//! user action is needed to try again.

pub mod dto;
pub mod http;
pub mod service;

pub use dto::{ModelArtifacts, MwpResult, UploadOutcome, Visualization};
pub use http::HttpModelService;
pub use service::{ModelService, ServiceTranslator};
