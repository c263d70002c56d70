//! Functional-boundary selection transition
//!
//! This module provides [`toggle_feature`], the canonical entry point for
//! selection changes. It takes ownership of the current selection, applies one
//! user toggle plus every implied adjustment, and returns the new consistent
//! state together with the freshly recomputed violation list.
//!
//! ## Consistency contract
//!
//! - Selecting a feature selects its whole ancestor chain and unselects the
//!   other members of its XOR group (one group, no further cascade).
//! - Deselecting a feature deselects all of its descendants and every feature
//!   that directly depends on it. The dependency cascade is a single hop, not
//!   a transitive closure.
//! - Mandatory features cannot be deselected through this path; the request
//!   is a no-op.
//!
//! The function is deterministic and total: a feature name absent from the
//! tree degenerates to setting the single entry, with empty ancestor and
//! descendant sets.

use crate::model::{FeatureNode, ModelMetadata, SelectionState};
use crate::rules::validation::{validate_selection, ValidationError};
use crate::traversal::{find_all_descendants, find_parent};

/// Apply one selection toggle, returning the new state and its violations
///
/// # Arguments
/// * `selection` - Current selection state (ownership transferred)
/// * `feature` - Name of the toggled feature
/// * `selected` - Desired flag for the feature
/// * `tree` - The feature model tree
/// * `metadata` - Mandatory/XOR/dependency rules for the model
pub fn toggle_feature(
    mut selection: SelectionState,
    feature: &str,
    selected: bool,
    tree: &FeatureNode,
    metadata: &ModelMetadata,
) -> (SelectionState, Vec<ValidationError>) {
    if !selected && metadata.is_mandatory(feature) {
        // Mandatory checkboxes are locked: selection comes back unchanged
        let errors = validate_selection(&selection, metadata);
        return (selection, errors);
    }

    if selected {
        selection.set(feature, true);

        if let Some(group) = metadata.xor_group_of(feature) {
            for member in group {
                if member != feature {
                    selection.set(member.clone(), false);
                }
            }
        }

        // Selecting implies the whole ancestor chain; siblings and children
        // are never selected automatically
        let mut current = feature.to_string();
        while let Some(parent) = find_parent(&current, tree) {
            selection.set(parent, true);
            current = parent.to_string();
        }
    } else {
        selection.set(feature, false);

        for descendant in find_all_descendants(feature, tree) {
            selection.set(descendant, false);
        }

        // Single hop over the dependency graph, deliberately not transitive
        for dependent in metadata.direct_dependents_of(feature) {
            selection.set(dependent, false);
        }
    }

    let errors = validate_selection(&selection, metadata);
    (selection, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeatureGroup, GroupType};

    fn tree() -> FeatureNode {
        FeatureNode::new("Root").with_child(
            FeatureNode::new("A")
                .with_child(FeatureNode::new("B"))
                .with_group(FeatureGroup::new(
                    GroupType::Xor,
                    vec![FeatureNode::new("X"), FeatureNode::new("Y")],
                )),
        )
    }

    #[test]
    fn test_select_raises_ancestor_chain() {
        let (selection, _) = toggle_feature(
            SelectionState::new(),
            "B",
            true,
            &tree(),
            &ModelMetadata::new(),
        );

        assert!(selection.is_selected("B"));
        assert!(selection.is_selected("A"));
        assert!(selection.is_selected("Root"));
    }

    #[test]
    fn test_xor_select_forces_other_members_off() {
        let mut metadata = ModelMetadata::new();
        metadata.xor_groups = vec![vec!["X".to_string(), "Y".to_string()]];

        let start: SelectionState = [("Y", true)].into_iter().collect();
        let (selection, _) = toggle_feature(start, "X", true, &tree(), &metadata);

        assert!(selection.is_selected("X"));
        assert!(!selection.is_selected("Y"));
    }

    #[test]
    fn test_deselect_clears_descendants() {
        let start: SelectionState = [("Root", true), ("A", true), ("B", true), ("X", true)]
            .into_iter()
            .collect();

        let (selection, _) =
            toggle_feature(start, "A", false, &tree(), &ModelMetadata::new());

        assert!(!selection.is_selected("A"));
        assert!(!selection.is_selected("B"));
        assert!(!selection.is_selected("X"));
        assert!(selection.is_selected("Root"));
    }

    #[test]
    fn test_deselect_mandatory_is_noop() {
        let mut metadata = ModelMetadata::new();
        metadata.mandatory_features = vec!["A".to_string()];

        let start: SelectionState = [("Root", true), ("A", true)].into_iter().collect();
        let (selection, errors) = toggle_feature(start.clone(), "A", false, &tree(), &metadata);

        assert_eq!(selection, start);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_feature_degenerates_to_single_entry() {
        let (selection, errors) = toggle_feature(
            SelectionState::new(),
            "Ghost",
            true,
            &tree(),
            &ModelMetadata::new(),
        );

        assert!(selection.is_selected("Ghost"));
        assert_eq!(selection.selected_count(), 1);
        assert!(errors.is_empty());
    }
}
