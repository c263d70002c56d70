//! Visualize command
//!
//! Usage: featconf visualize <FILE>
//!
//! Prints the feature tree with mandatory and group markers, followed by the
//! extracted selection rules.

use clap::Args;
use std::path::PathBuf;

use featconf_client::HttpModelService;
use featconf_core::model::{FeatureChild, FeatureNode};
use featconf_engine::Session;

#[derive(Debug, Args)]
pub struct VisualizeArgs {
    /// Feature model file to visualize
    pub file: PathBuf,
}

/// Execute visualize command
pub fn execute(
    args: VisualizeArgs,
    service: HttpModelService,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(service);
    session.set_file(&args.file);

    let loaded = session.visualize()?;

    print_node(&loaded.tree, 0);

    let metadata = &loaded.metadata;
    if !metadata.mandatory_features.is_empty() {
        println!("Mandatory: {}", metadata.mandatory_features.join(", "));
    }
    for group in &metadata.xor_groups {
        println!("XOR group: {}", group.join(", "));
    }
    for (feature, required) in &metadata.dependencies {
        println!("{} requires {}", feature, required.join(" and "));
    }

    Ok(())
}

fn print_node(node: &FeatureNode, depth: usize) {
    let marker = if node.mandatory { "*" } else { "" };
    println!("{}{}{}", "  ".repeat(depth), node.name, marker);

    for child in &node.children {
        match child {
            FeatureChild::Feature(feature) => print_node(feature, depth + 1),
            FeatureChild::Group(group) => {
                println!("{}({})", "  ".repeat(depth + 1), group.group_type);
                for member in &group.children {
                    print_node(member, depth + 2);
                }
            }
        }
    }
}
