//! Cross-tree constraint registry
//!
//! Owns the ordered constraint list and the one-at-a-time pending-add flow.
//! Adding a constraint is a two-step prompt modeled as an explicit finite
//! state machine rather than nested UI flags:
//!
//! ```text
//! Idle -> Proposed (reuse or auto translation, awaiting confirmation)
//!      -> Accepted (appended)
//!       | Rejected -> ManualPending -> Accepted (appended, with or
//!                                      without an expression)
//! ```
//!
//! A statement whose case-insensitive twin already carries a translation is
//! proposed for reuse without calling the translation collaborator at all.
//! Untranslated constraints are legal and stay queryable so the upstream
//! formula generator can request re-translation later.

use tracing::debug;

use crate::errors::{FeatConfError, Result};
use crate::model::Constraint;

/// A translation proposal produced by the collaborator (or reused locally)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationProposal {
    /// Boolean expression over feature names
    pub boolean_expression: String,
    /// Optional classification tag (e.g. "requires", "excludes")
    pub kind: Option<String>,
}

/// Collaborator seam: translate an English statement to a boolean expression
///
/// Implementations live outside the core (the HTTP client crate provides
/// one). A `Collaborator` error means the service explicitly could not
/// translate; a `Transport` error means the service was never reached.
pub trait ConstraintTranslator {
    /// Translate the statement given the available feature names
    ///
    /// # Errors
    ///
    /// `Collaborator` when the service answers with an error payload,
    /// `Transport` when the call itself fails.
    fn translate(&self, english_statement: &str, features: &[String])
        -> Result<TranslationProposal>;
}

/// Where a pending proposal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalSource {
    /// An existing constraint with the same statement already has this expression
    ReuseExisting,
    /// The translation collaborator produced this expression
    AutoTranslation,
}

/// The in-flight constraint add, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAdd {
    /// A translation is proposed and awaits explicit confirmation
    Proposed {
        statement: String,
        boolean_expression: String,
        kind: Option<String>,
        source: ProposalSource,
    },
    /// Automatic translation failed or was rejected; awaiting manual entry
    ManualPending { statement: String },
}

impl PendingAdd {
    fn statement(&self) -> &str {
        match self {
            PendingAdd::Proposed { statement, .. } => statement,
            PendingAdd::ManualPending { statement } => statement,
        }
    }
}

/// Ordered registry of cross-tree constraints with a one-slot pending add
#[derive(Debug, Default)]
pub struct ConstraintRegistry {
    constraints: Vec<Constraint>,
    pending: Option<PendingAdd>,
}

impl ConstraintRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-seeded with constraints (e.g. from an upload)
    pub fn with_constraints(constraints: Vec<Constraint>) -> Self {
        Self {
            constraints,
            pending: None,
        }
    }

    /// All constraints, in append order
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Constraints still lacking a boolean expression
    pub fn untranslated(&self) -> Vec<&Constraint> {
        self.constraints
            .iter()
            .filter(|c| !c.is_translated())
            .collect()
    }

    /// The in-flight add, if one is pending
    pub fn pending(&self) -> Option<&PendingAdd> {
        self.pending.as_ref()
    }

    /// Start adding a constraint from an English statement
    ///
    /// Dedup check first: a case-insensitive statement match against an
    /// existing translated constraint proposes reuse without touching the
    /// translator. Otherwise the translator runs; success proposes its
    /// expression, an explicit collaborator error routes to manual entry.
    /// A transport failure propagates and leaves the registry idle.
    ///
    /// # Errors
    ///
    /// `MissingInput` for a blank statement, `TranslationPending` when an add
    /// is already in flight, `Transport` when the translator is unreachable.
    pub fn begin_add(
        &mut self,
        statement: &str,
        features: &[String],
        translator: &dyn ConstraintTranslator,
    ) -> Result<&PendingAdd> {
        let statement = statement.trim();
        if statement.is_empty() {
            return Err(FeatConfError::missing_input("constraint statement"));
        }
        if self.pending.is_some() {
            return Err(FeatConfError::TranslationPending);
        }

        let existing = self
            .constraints
            .iter()
            .find(|c| c.matches_statement(statement) && c.is_translated());

        let pending = if let Some(existing) = existing {
            debug!(statement, "reusing existing constraint translation");
            PendingAdd::Proposed {
                statement: statement.to_string(),
                boolean_expression: existing
                    .boolean_expression
                    .clone()
                    .unwrap_or_default(),
                kind: None,
                source: ProposalSource::ReuseExisting,
            }
        } else {
            match translator.translate(statement, features) {
                Ok(proposal) => {
                    debug!(statement, "automatic translation proposed");
                    PendingAdd::Proposed {
                        statement: statement.to_string(),
                        boolean_expression: proposal.boolean_expression,
                        kind: proposal.kind,
                        source: ProposalSource::AutoTranslation,
                    }
                }
                Err(FeatConfError::Collaborator { message }) => {
                    debug!(statement, %message, "automatic translation failed; manual entry");
                    PendingAdd::ManualPending {
                        statement: statement.to_string(),
                    }
                }
                Err(other) => return Err(other),
            }
        };

        Ok(self.pending.insert(pending))
    }

    /// Accept the proposed translation and append the constraint
    ///
    /// # Errors
    ///
    /// `NoPendingTranslation` unless a proposal is awaiting confirmation.
    pub fn confirm_pending(&mut self) -> Result<&Constraint> {
        match self.pending.take() {
            Some(PendingAdd::Proposed {
                statement,
                boolean_expression,
                kind,
                ..
            }) => {
                let mut constraint =
                    Constraint::new(statement).with_expression(boolean_expression);
                if let Some(kind) = kind {
                    constraint = constraint.with_kind(kind);
                }
                Ok(self.append(constraint))
            }
            other => {
                self.pending = other;
                Err(FeatConfError::NoPendingTranslation)
            }
        }
    }

    /// Reject the proposed translation and switch to manual entry
    ///
    /// Nothing is appended yet; the add stays pending.
    ///
    /// # Errors
    ///
    /// `NoPendingTranslation` unless a proposal is awaiting confirmation.
    pub fn reject_pending(&mut self) -> Result<()> {
        match self.pending.take() {
            Some(PendingAdd::Proposed { statement, .. }) => {
                self.pending = Some(PendingAdd::ManualPending { statement });
                Ok(())
            }
            other => {
                self.pending = other;
                Err(FeatConfError::NoPendingTranslation)
            }
        }
    }

    /// Finish a manual entry, appending the constraint
    ///
    /// A blank or absent expression counts as a skip: the constraint is still
    /// appended, untranslated.
    ///
    /// # Errors
    ///
    /// `NoManualPending` unless an add is awaiting manual entry.
    pub fn complete_manual(&mut self, expression: Option<&str>) -> Result<&Constraint> {
        match self.pending.take() {
            Some(PendingAdd::ManualPending { statement }) => {
                let expression = expression.map(str::trim).filter(|e| !e.is_empty());
                let mut constraint = Constraint::new(statement);
                if let Some(expression) = expression {
                    constraint = constraint.with_expression(expression);
                }
                Ok(self.append(constraint))
            }
            other => {
                self.pending = other;
                Err(FeatConfError::NoManualPending)
            }
        }
    }

    /// Abandon the in-flight add, if any
    pub fn cancel_pending(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.statement().to_string())
    }

    /// Attach an expression to an existing constraint by id
    ///
    /// Used to resolve constraints that arrived untranslated (e.g. from an
    /// upload) once the user supplies a translation.
    ///
    /// # Errors
    ///
    /// `ConstraintNotFound` if no constraint has the given id.
    pub fn set_expression(&mut self, id: &str, expression: &str) -> Result<()> {
        let constraint = self
            .constraints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| FeatConfError::ConstraintNotFound {
                constraint_id: id.to_string(),
            })?;
        constraint.boolean_expression = Some(expression.trim().to_string());
        Ok(())
    }

    /// Remove a constraint by id
    ///
    /// # Errors
    ///
    /// `ConstraintNotFound` if no constraint has the given id.
    pub fn remove(&mut self, id: &str) -> Result<Constraint> {
        match self.constraints.iter().position(|c| c.id == id) {
            Some(index) => Ok(self.constraints.remove(index)),
            None => Err(FeatConfError::ConstraintNotFound {
                constraint_id: id.to_string(),
            }),
        }
    }

    /// Drop every constraint and any pending add (session reset)
    pub fn clear(&mut self) {
        self.constraints.clear();
        self.pending = None;
    }

    /// Replace the whole constraint list (e.g. from a collaborator response)
    pub fn replace_all(&mut self, constraints: Vec<Constraint>) {
        self.constraints = constraints;
        self.pending = None;
    }

    fn append(&mut self, constraint: Constraint) -> &Constraint {
        self.constraints.push(constraint);
        self.constraints.last().expect("just pushed")
    }
}
