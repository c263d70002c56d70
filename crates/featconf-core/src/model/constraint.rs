//! Cross-tree constraint domain model
//!
//! A constraint pairs a free-text English statement with an optional boolean
//! expression over feature names. Untranslated constraints are legal: they are
//! tracked so the formula generator can request re-translation later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A cross-tree constraint held by the registry
///
/// The `id` is an opaque UUIDv7 string assigned at creation and stable for the
/// registry's lifetime; it is the preferred rendering/removal key. The English
/// statement doubles as a case-insensitive deduplication key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Opaque unique identifier (UUIDv7)
    pub id: String,

    /// Free-text English statement of the rule
    #[serde(rename = "englishStatement")]
    pub english_statement: String,

    /// Boolean expression over feature names; absent means untranslated
    #[serde(
        rename = "booleanExpression",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub boolean_expression: Option<String>,

    /// Classification tag from the translation service (e.g. "requires")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Creation timestamp
    #[serde(default = "Utc::now", skip_serializing)]
    pub created_at: DateTime<Utc>,
}

impl Constraint {
    /// Create an untranslated constraint with a fresh id
    pub fn new(english_statement: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            english_statement: english_statement.into(),
            boolean_expression: None,
            kind: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a boolean expression
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.boolean_expression = Some(expression.into());
        self
    }

    /// Attach a classification tag
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Check if this constraint carries a boolean expression
    pub fn is_translated(&self) -> bool {
        self.boolean_expression.is_some()
    }

    /// Case-insensitive comparison against another English statement
    pub fn matches_statement(&self, statement: &str) -> bool {
        self.english_statement.to_lowercase() == statement.to_lowercase()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.boolean_expression {
            Some(expr) => write!(f, "{} [{}]", self.english_statement, expr),
            None => write!(f, "{} [untranslated]", self.english_statement),
        }
    }
}
