//! Feature tree domain model
//!
//! A feature model is a tree of named features. Each feature owns an ordered
//! list of children, where a child is either another feature or a group (XOR
//! or OR) of features. Groups are structural containers, not selectable
//! features themselves.
//!
//! The serde representation matches the collaborator wire shape: children are
//! internally tagged with `type: "feature" | "group"`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;

/// A single feature in the model tree
///
/// Feature names are unique across the whole tree; lookups by name rely on
/// this. A model with duplicate names is an authoring error upstream and the
/// traversal functions will settle on the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureNode {
    /// Unique name of this feature within the tree
    pub name: String,

    /// Whether this feature must be selected in every configuration
    #[serde(default)]
    pub mandatory: bool,

    /// Names of features this feature requires (AND semantics)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,

    /// Ordered children: plain features or XOR/OR groups
    #[serde(default)]
    pub children: Vec<FeatureChild>,
}

impl FeatureNode {
    /// Create a leaf feature with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mandatory: false,
            requires: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Mark this feature as mandatory
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Declare a requires-edge to another feature
    pub fn requires(mut self, required: impl Into<String>) -> Self {
        self.requires.push(required.into());
        self
    }

    /// Append a plain child feature
    pub fn with_child(mut self, child: FeatureNode) -> Self {
        self.children.push(FeatureChild::Feature(child));
        self
    }

    /// Append a group child
    pub fn with_group(mut self, group: FeatureGroup) -> Self {
        self.children.push(FeatureChild::Group(group));
        self
    }

    /// Check if this feature has no children at all
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A child slot in the tree: either a feature or a group of features
///
/// Explicit tagged union so traversal stays exhaustive and type-checked,
/// rather than shape-sniffing dynamic data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeatureChild {
    /// A plain feature subtree
    Feature(FeatureNode),
    /// A group whose members are jointly constrained
    Group(FeatureGroup),
}

/// A group container constraining the joint selection of its children
///
/// XOR: at most one member selected. OR: at least one member selected,
/// recorded in the model but not enforced by the selection validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureGroup {
    /// Group semantics
    pub group_type: GroupType,

    /// Member features (groups never nest directly inside groups)
    pub children: Vec<FeatureNode>,
}

impl FeatureGroup {
    /// Create a group of the given type with the given members
    pub fn new(group_type: GroupType, children: Vec<FeatureNode>) -> Self {
        Self {
            group_type,
            children,
        }
    }

    /// Member names in declaration order
    pub fn member_names(&self) -> Vec<String> {
        self.children.iter().map(|c| c.name.clone()).collect()
    }
}

/// Group semantics tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// At most one member may be selected
    Xor,
    /// At least one member must be selected (recorded, not enforced)
    Or,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupType::Xor => write!(f, "XOR"),
            GroupType::Or => write!(f, "OR"),
        }
    }
}

/// Parse a feature model tree from its wire JSON representation
///
/// # Errors
///
/// Returns `Serialization` if the JSON does not match the model shape.
pub fn parse_model(json: &str) -> Result<FeatureNode> {
    let node = serde_json::from_str(json)?;
    Ok(node)
}
