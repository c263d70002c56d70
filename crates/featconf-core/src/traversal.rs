//! Feature tree traversal
//!
//! Lookup operations over a parsed model: name extraction, parent lookup, and
//! descendant collection. All three descend through both plain children and
//! group children, and all three are total: unknown names come back as
//! `None`/empty rather than errors.
//!
//! Precondition: feature names are unique within the tree. With duplicates
//! the first match in pre-order wins; this is a model-authoring error
//! upstream and is not defended against here.

use crate::model::{FeatureChild, FeatureNode};

/// Extract every feature name in the tree in pre-order
///
/// Descends through group wrappers as if they were transparent; group
/// containers themselves contribute no name. Each feature appears exactly
/// once, in the order first encountered.
pub fn extract_feature_names(root: &FeatureNode) -> Vec<String> {
    let mut names = Vec::new();
    collect_names(root, &mut names);
    names
}

fn collect_names(node: &FeatureNode, names: &mut Vec<String>) {
    names.push(node.name.clone());
    for child in &node.children {
        match child {
            FeatureChild::Feature(feature) => collect_names(feature, names),
            FeatureChild::Group(group) => {
                for member in &group.children {
                    collect_names(member, names);
                }
            }
        }
    }
}

/// Find the name of the feature's parent node
///
/// The parent of a feature inside a group is the feature that owns the group
/// (groups are looked through, one level). Returns `None` when `name` is the
/// root or does not occur in the tree.
pub fn find_parent<'a>(name: &str, root: &'a FeatureNode) -> Option<&'a str> {
    for child in &root.children {
        match child {
            FeatureChild::Feature(feature) => {
                if feature.name == name {
                    return Some(&root.name);
                }
                if let Some(parent) = find_parent(name, feature) {
                    return Some(parent);
                }
            }
            FeatureChild::Group(group) => {
                for member in &group.children {
                    if member.name == name {
                        return Some(&root.name);
                    }
                    if let Some(parent) = find_parent(name, member) {
                        return Some(parent);
                    }
                }
            }
        }
    }
    None
}

/// Collect every feature name below the named feature, transitively
///
/// Excludes the named feature itself. Returns an empty vector when the name
/// does not occur in the tree.
pub fn find_all_descendants(name: &str, root: &FeatureNode) -> Vec<String> {
    match find_node(name, root) {
        Some(node) => {
            let mut descendants = Vec::new();
            for child in &node.children {
                match child {
                    FeatureChild::Feature(feature) => collect_names(feature, &mut descendants),
                    FeatureChild::Group(group) => {
                        for member in &group.children {
                            collect_names(member, &mut descendants);
                        }
                    }
                }
            }
            descendants
        }
        None => Vec::new(),
    }
}

fn find_node<'a>(name: &str, node: &'a FeatureNode) -> Option<&'a FeatureNode> {
    if node.name == name {
        return Some(node);
    }
    for child in &node.children {
        match child {
            FeatureChild::Feature(feature) => {
                if let Some(found) = find_node(name, feature) {
                    return Some(found);
                }
            }
            FeatureChild::Group(group) => {
                for member in &group.children {
                    if let Some(found) = find_node(name, member) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeatureGroup, GroupType};

    fn tree() -> FeatureNode {
        // Root
        //  ├─ A ─ B
        //  └─ (XOR) X, Y ─ Z
        FeatureNode::new("Root")
            .with_child(FeatureNode::new("A").with_child(FeatureNode::new("B")))
            .with_group(FeatureGroup::new(
                GroupType::Xor,
                vec![
                    FeatureNode::new("X"),
                    FeatureNode::new("Y").with_child(FeatureNode::new("Z")),
                ],
            ))
    }

    #[test]
    fn test_extract_feature_names_preorder() {
        assert_eq!(
            extract_feature_names(&tree()),
            vec!["Root", "A", "B", "X", "Y", "Z"]
        );
    }

    #[test]
    fn test_find_parent_plain_child() {
        let tree = tree();
        assert_eq!(find_parent("A", &tree), Some("Root"));
        assert_eq!(find_parent("B", &tree), Some("A"));
    }

    #[test]
    fn test_find_parent_sees_through_group() {
        let tree = tree();
        // group members' parent is the feature owning the group
        assert_eq!(find_parent("X", &tree), Some("Root"));
        assert_eq!(find_parent("Z", &tree), Some("Y"));
    }

    #[test]
    fn test_find_parent_root_and_unknown() {
        let tree = tree();
        assert_eq!(find_parent("Root", &tree), None);
        assert_eq!(find_parent("Nope", &tree), None);
    }

    #[test]
    fn test_find_all_descendants() {
        let tree = tree();
        assert_eq!(find_all_descendants("Root", &tree), vec!["A", "B", "X", "Y", "Z"]);
        assert_eq!(find_all_descendants("Y", &tree), vec!["Z"]);
        assert!(find_all_descendants("B", &tree).is_empty());
    }

    #[test]
    fn test_find_all_descendants_unknown_name() {
        assert!(find_all_descendants("Nope", &tree()).is_empty());
    }
}
