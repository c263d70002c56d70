use std::cell::Cell;

use featconf_core::errors::{FeatConfError, Result};
use featconf_core::model::Constraint;
use featconf_core::registry::{
    ConstraintRegistry, ConstraintTranslator, PendingAdd, ProposalSource, TranslationProposal,
};

/// Scripted translator that counts how often it is consulted
struct CountingTranslator {
    calls: Cell<usize>,
    response: Result<TranslationProposal>,
}

impl CountingTranslator {
    fn ok(expression: &str) -> Self {
        Self {
            calls: Cell::new(0),
            response: Ok(TranslationProposal {
                boolean_expression: expression.to_string(),
                kind: Some("requires".to_string()),
            }),
        }
    }

    fn failing() -> Self {
        Self {
            calls: Cell::new(0),
            response: Err(FeatConfError::Collaborator {
                message: "no pattern matched".to_string(),
            }),
        }
    }
}

impl ConstraintTranslator for CountingTranslator {
    fn translate(&self, _statement: &str, _features: &[String]) -> Result<TranslationProposal> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone()
    }
}

// ===== DEDUPLICATION TESTS =====

#[test]
fn test_known_statement_never_calls_translator() {
    let translator = CountingTranslator::ok("GPS → Maps");
    let mut registry = ConstraintRegistry::with_constraints(vec![
        Constraint::new("GPS requires Maps").with_expression("GPS → Maps"),
    ]);

    registry
        .begin_add("gps requires maps", &[], &translator)
        .unwrap();

    assert_eq!(translator.calls.get(), 0);
    assert!(matches!(
        registry.pending(),
        Some(PendingAdd::Proposed {
            source: ProposalSource::ReuseExisting,
            ..
        })
    ));
}

#[test]
fn test_confirming_reuse_appends_with_existing_expression() {
    let translator = CountingTranslator::ok("unused");
    let mut registry = ConstraintRegistry::with_constraints(vec![
        Constraint::new("GPS requires Maps").with_expression("GPS → Maps"),
    ]);

    registry.begin_add("GPS requires Maps", &[], &translator).unwrap();
    let appended = registry.confirm_pending().unwrap();

    assert_eq!(appended.boolean_expression.as_deref(), Some("GPS → Maps"));
    assert_eq!(registry.constraints().len(), 2);
    // Two constraints with the same statement share an expression without diverging
    let expressions: Vec<_> = registry
        .constraints()
        .iter()
        .map(|c| c.boolean_expression.as_deref())
        .collect();
    assert_eq!(expressions, vec![Some("GPS → Maps"), Some("GPS → Maps")]);
}

#[test]
fn test_rejecting_reuse_prompts_manual_without_appending() {
    let translator = CountingTranslator::ok("unused");
    let mut registry = ConstraintRegistry::with_constraints(vec![
        Constraint::new("GPS requires Maps").with_expression("GPS → Maps"),
    ]);

    registry.begin_add("GPS requires Maps", &[], &translator).unwrap();
    registry.reject_pending().unwrap();

    assert_eq!(registry.constraints().len(), 1);
    assert!(matches!(
        registry.pending(),
        Some(PendingAdd::ManualPending { .. })
    ));
}

// ===== TRANSLATION FLOW TESTS =====

#[test]
fn test_automatic_translation_requires_confirmation() {
    let translator = CountingTranslator::ok("Camera → HighResolution");
    let mut registry = ConstraintRegistry::new();

    registry
        .begin_add("Camera requires HighResolution", &[], &translator)
        .unwrap();

    assert_eq!(translator.calls.get(), 1);
    // Proposed, not inserted
    assert!(registry.constraints().is_empty());

    let appended = registry.confirm_pending().unwrap();
    assert_eq!(
        appended.boolean_expression.as_deref(),
        Some("Camera → HighResolution")
    );
    assert_eq!(appended.kind.as_deref(), Some("requires"));
}

#[test]
fn test_skipping_manual_translation_still_appends() {
    let translator = CountingTranslator::failing();
    let mut registry = ConstraintRegistry::new();

    registry
        .begin_add("The camera is special", &[], &translator)
        .unwrap();
    let appended = registry.complete_manual(None).unwrap();

    assert!(appended.boolean_expression.is_none());
    assert_eq!(registry.constraints().len(), 1);
    assert_eq!(registry.untranslated().len(), 1);
}

#[test]
fn test_each_appended_constraint_gets_a_unique_stable_id() {
    let translator = CountingTranslator::ok("A → B");
    let mut registry = ConstraintRegistry::new();

    registry.begin_add("first", &[], &translator).unwrap();
    let first_id = registry.confirm_pending().unwrap().id.clone();

    registry.begin_add("second", &[], &translator).unwrap();
    let second_id = registry.confirm_pending().unwrap().id.clone();

    assert_ne!(first_id, second_id);
    // Ids stay stable for the registry's lifetime
    assert_eq!(registry.constraints()[0].id, first_id);
    assert_eq!(registry.constraints()[1].id, second_id);
}

#[test]
fn test_serialized_adds_after_resolution() {
    let translator = CountingTranslator::ok("A → B");
    let mut registry = ConstraintRegistry::new();

    registry.begin_add("first", &[], &translator).unwrap();
    assert_eq!(
        registry.begin_add("second", &[], &translator).err(),
        Some(FeatConfError::TranslationPending)
    );

    registry.confirm_pending().unwrap();
    // Once resolved, the next add proceeds
    registry.begin_add("second", &[], &translator).unwrap();
    registry.confirm_pending().unwrap();
    assert_eq!(registry.constraints().len(), 2);
}
