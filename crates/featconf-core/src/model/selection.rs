//! Selection state: which features the user currently has checked

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from feature name to selected flag
///
/// Insertion order is irrelevant; consumers that need stable output should
/// sort (see [`SelectionState::selected_features`]). Features never touched by
/// a toggle simply have no entry, which reads as unselected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    features: HashMap<String, bool>,
}

impl SelectionState {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a feature is currently selected
    pub fn is_selected(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(false)
    }

    /// Set a feature's selected flag
    pub fn set(&mut self, feature: impl Into<String>, selected: bool) {
        self.features.insert(feature.into(), selected);
    }

    /// Names of all currently selected features, sorted for stable output
    pub fn selected_features(&self) -> Vec<&str> {
        let mut selected: Vec<&str> = self
            .features
            .iter()
            .filter(|(_, &on)| on)
            .map(|(name, _)| name.as_str())
            .collect();
        selected.sort_unstable();
        selected
    }

    /// Number of selected features
    pub fn selected_count(&self) -> usize {
        self.features.values().filter(|&&on| on).count()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.features.clear();
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            features: iter
                .into_iter()
                .map(|(name, on)| (name.into(), on))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_feature_reads_unselected() {
        let selection = SelectionState::new();
        assert!(!selection.is_selected("GPS"));
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_set_and_query() {
        let mut selection = SelectionState::new();
        selection.set("GPS", true);
        selection.set("Camera", false);

        assert!(selection.is_selected("GPS"));
        assert!(!selection.is_selected("Camera"));
        assert_eq!(selection.selected_count(), 1);
    }

    #[test]
    fn test_selected_features_sorted() {
        let selection: SelectionState =
            [("Zoom", true), ("Calls", true), ("GPS", false)].into_iter().collect();

        assert_eq!(selection.selected_features(), vec!["Calls", "Zoom"]);
    }

    #[test]
    fn test_clear() {
        let mut selection: SelectionState = [("GPS", true)].into_iter().collect();
        selection.clear();
        assert_eq!(selection, SelectionState::new());
    }
}
