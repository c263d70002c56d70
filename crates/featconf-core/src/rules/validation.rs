//! Advisory selection validation
//!
//! The full error list is recomputed from scratch against the current
//! selection on every change, never incrementally. Violations are advisory:
//! the user may keep a selection that breaks mandatory/XOR/dependency rules,
//! and the list tells them what is inconsistent instead of blocking the
//! toggle.

use std::fmt;

use crate::model::{ModelMetadata, SelectionState};

/// One violated rule instance
///
/// `Display` renders the human-readable message shown next to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory feature is not selected
    MandatoryNotSelected { feature: String },

    /// More than one member of an XOR group is selected
    XorConflict { group: Vec<String> },

    /// A selected feature is missing at least one of its requirements
    MissingRequirements {
        feature: String,
        required: Vec<String>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MandatoryNotSelected { feature } => {
                write!(f, "{} is mandatory and must be selected.", feature)
            }
            ValidationError::XorConflict { group } => {
                write!(
                    f,
                    "Only one feature can be selected from XOR group: {}",
                    group.join(", ")
                )
            }
            ValidationError::MissingRequirements { feature, required } => {
                write!(f, "{} requires {}", feature, required.join(" and "))
            }
        }
    }
}

/// Recompute the full violation list for a selection
///
/// Order is stable: mandatory violations in metadata order, then XOR group
/// violations in tree order, then dependency violations in dependency-map
/// (BTreeMap) order.
pub fn validate_selection(
    selection: &SelectionState,
    metadata: &ModelMetadata,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for feature in &metadata.mandatory_features {
        if !selection.is_selected(feature) {
            errors.push(ValidationError::MandatoryNotSelected {
                feature: feature.clone(),
            });
        }
    }

    for group in &metadata.xor_groups {
        let selected_count = group.iter().filter(|f| selection.is_selected(f)).count();
        if selected_count > 1 {
            errors.push(ValidationError::XorConflict {
                group: group.clone(),
            });
        }
    }

    for (feature, required) in &metadata.dependencies {
        if selection.is_selected(feature) && required.iter().any(|r| !selection.is_selected(r)) {
            errors.push(ValidationError::MissingRequirements {
                feature: feature.clone(),
                required: required.clone(),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ModelMetadata {
        let mut metadata = ModelMetadata::new();
        metadata.mandatory_features = vec!["Calls".to_string()];
        metadata.xor_groups = vec![vec!["Basic".to_string(), "Colour".to_string()]];
        metadata
            .dependencies
            .insert("Camera".to_string(), vec!["HighResolution".to_string()]);
        metadata
    }

    #[test]
    fn test_empty_selection_reports_mandatory_only() {
        let errors = validate_selection(&SelectionState::new(), &metadata());

        assert_eq!(
            errors,
            vec![ValidationError::MandatoryNotSelected {
                feature: "Calls".to_string()
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            "Calls is mandatory and must be selected."
        );
    }

    #[test]
    fn test_xor_conflict_message_names_group() {
        let selection: SelectionState =
            [("Calls", true), ("Basic", true), ("Colour", true)].into_iter().collect();

        let errors = validate_selection(&selection, &metadata());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Only one feature can be selected from XOR group: Basic, Colour"
        );
    }

    #[test]
    fn test_missing_requirement_message() {
        let selection: SelectionState = [("Calls", true), ("Camera", true)].into_iter().collect();

        let errors = validate_selection(&selection, &metadata());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Camera requires HighResolution");
    }

    #[test]
    fn test_requirement_satisfied_is_clean() {
        let selection: SelectionState =
            [("Calls", true), ("Camera", true), ("HighResolution", true)]
                .into_iter()
                .collect();

        assert!(validate_selection(&selection, &metadata()).is_empty());
    }

    #[test]
    fn test_unselected_dependent_never_reports() {
        // Camera unselected: its missing requirement is irrelevant
        let selection: SelectionState = [("Calls", true)].into_iter().collect();
        assert!(validate_selection(&selection, &metadata()).is_empty());
    }

    #[test]
    fn test_multi_requirement_joined_with_and() {
        let mut metadata = ModelMetadata::new();
        metadata.dependencies.insert(
            "Video".to_string(),
            vec!["Camera".to_string(), "Storage".to_string()],
        );
        let selection: SelectionState = [("Video", true)].into_iter().collect();

        let errors = validate_selection(&selection, &metadata);
        assert_eq!(errors[0].to_string(), "Video requires Camera and Storage");
    }
}
