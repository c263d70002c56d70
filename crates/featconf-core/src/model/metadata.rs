//! Model metadata: the rule inputs of the selection validator
//!
//! Mandatory features, XOR groups, and the dependency map are delivered by the
//! visualization collaborator alongside the tree, but can also be derived
//! locally from a parsed model via [`ModelMetadata::from_tree`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::feature::{FeatureChild, FeatureNode, GroupType};

/// Selection rules extracted from a feature model
///
/// `dependencies` is a BTreeMap so validation output ordering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Features that must always be selected
    #[serde(default)]
    pub mandatory_features: Vec<String>,

    /// Mutually exclusive sibling sets, in tree order
    #[serde(default)]
    pub xor_groups: Vec<Vec<String>>,

    /// Feature name -> names it requires (AND semantics)
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,
}

impl ModelMetadata {
    /// Create empty metadata (no rules)
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive metadata from a parsed tree
    ///
    /// Walks the tree once, collecting mandatory flags, XOR group memberships,
    /// and `requires` edges in pre-order.
    pub fn from_tree(root: &FeatureNode) -> Self {
        let mut metadata = Self::new();
        metadata.collect(root);
        metadata
    }

    fn collect(&mut self, node: &FeatureNode) {
        if node.mandatory {
            self.mandatory_features.push(node.name.clone());
        }
        if !node.requires.is_empty() {
            self.dependencies
                .insert(node.name.clone(), node.requires.clone());
        }

        for child in &node.children {
            match child {
                FeatureChild::Feature(feature) => self.collect(feature),
                FeatureChild::Group(group) => {
                    if group.group_type == GroupType::Xor {
                        self.xor_groups.push(group.member_names());
                    }
                    for member in &group.children {
                        self.collect(member);
                    }
                }
            }
        }
    }

    /// Check if a feature is mandatory
    pub fn is_mandatory(&self, feature: &str) -> bool {
        self.mandatory_features.iter().any(|f| f == feature)
    }

    /// The first XOR group containing the feature, if any
    pub fn xor_group_of(&self, feature: &str) -> Option<&[String]> {
        self.xor_groups
            .iter()
            .find(|group| group.iter().any(|f| f == feature))
            .map(|group| group.as_slice())
    }

    /// Names the feature requires, if it has any dependencies
    pub fn requirements_of(&self, feature: &str) -> Option<&[String]> {
        self.dependencies.get(feature).map(|deps| deps.as_slice())
    }

    /// Features that directly depend on the given feature (one hop)
    pub fn direct_dependents_of(&self, feature: &str) -> Vec<String> {
        self.dependencies
            .iter()
            .filter(|(_, required)| required.iter().any(|r| r == feature))
            .map(|(dependent, _)| dependent.clone())
            .collect()
    }
}
