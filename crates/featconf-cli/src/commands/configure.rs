//! Configure command
//!
//! Usage: featconf configure <FILE>
//!
//! Interactive selection wizard. Commands:
//!   select <feature>      toggle a feature on
//!   deselect <feature>    toggle a feature off
//!   constraint <text>     add a cross-tree constraint in English
//!   show                  print the tree with the current selection
//!   errors                print the current rule violations
//!   done                  finish and print the final selection

use clap::Args;
use std::path::PathBuf;

use featconf_client::HttpModelService;
use featconf_core::model::{FeatureChild, FeatureNode, SelectionState};
use featconf_engine::{ConstraintPrompt, Session};

use super::prompt;

#[derive(Debug, Args)]
pub struct ConfigureArgs {
    /// Feature model file to configure
    pub file: PathBuf,
}

/// Execute configure command
pub fn execute(
    args: ConfigureArgs,
    service: HttpModelService,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(service);
    session.set_file(&args.file);
    let tree = session.visualize()?.tree.clone();

    print_selection_tree(&tree, session.selection());
    println!("Type 'select <feature>', 'deselect <feature>', 'constraint <text>', 'show', 'errors', or 'done'.");

    loop {
        let line = prompt("> ")?;
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.as_str(), ""),
        };

        let result = match command {
            "" => continue,
            "done" => break,
            "select" => toggle(&mut session, rest, true),
            "deselect" => toggle(&mut session, rest, false),
            "constraint" => add_constraint(&mut session, rest),
            "show" => {
                print_selection_tree(&tree, session.selection());
                Ok(())
            }
            "errors" => {
                print_errors(&session);
                Ok(())
            }
            other => {
                println!("Unknown command: {}", other);
                Ok(())
            }
        };

        // Errors here are advisory for the wizard loop: report and continue
        if let Err(e) = result {
            println!("{}", e);
        }
    }

    println!(
        "Final selection: {}",
        session.selection().selected_features().join(", ")
    );
    print_errors(&session);

    Ok(())
}

fn toggle(
    session: &mut Session<HttpModelService>,
    feature: &str,
    selected: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if feature.is_empty() {
        println!("Usage: {} <feature>", if selected { "select" } else { "deselect" });
        return Ok(());
    }

    let errors = session.toggle_feature(feature, selected)?;
    if errors.is_empty() {
        println!("Selection is consistent.");
    } else {
        for error in errors {
            println!("  ! {}", error);
        }
    }
    Ok(())
}

fn add_constraint(
    session: &mut Session<HttpModelService>,
    statement: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match session.add_constraint(statement)? {
        ConstraintPrompt::ConfirmReuse { boolean_expression } => {
            println!("A translation already exists for this constraint:");
            println!("  {}", boolean_expression);
            confirm_or_manual(session)?;
        }
        ConstraintPrompt::ConfirmTranslation { boolean_expression } => {
            println!("Proposed translation:");
            println!("  {}", boolean_expression);
            confirm_or_manual(session)?;
        }
        ConstraintPrompt::ManualEntry => {
            manual_entry(session)?;
        }
    }

    println!("Constraints:");
    for constraint in session.registry().constraints() {
        println!("  {}", constraint);
    }
    Ok(())
}

fn confirm_or_manual(
    session: &mut Session<HttpModelService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let answer = prompt("Use this translation? [y/n] ")?;
    if answer.eq_ignore_ascii_case("y") {
        session.confirm_constraint()?;
    } else {
        session.reject_constraint()?;
        manual_entry(session)?;
    }
    Ok(())
}

fn manual_entry(
    session: &mut Session<HttpModelService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let expression = prompt("Boolean expression (blank to skip): ")?;
    let expression = if expression.is_empty() {
        None
    } else {
        Some(expression.as_str())
    };
    session.manual_constraint(expression)?;
    Ok(())
}

fn print_errors(session: &Session<HttpModelService>) {
    if session.validation_errors().is_empty() {
        println!("No rule violations.");
    } else {
        for error in session.validation_errors() {
            println!("  ! {}", error);
        }
    }
}

fn print_selection_tree(tree: &FeatureNode, selection: &SelectionState) {
    print_node(tree, selection, 0);
}

fn print_node(node: &FeatureNode, selection: &SelectionState, depth: usize) {
    let checkbox = if selection.is_selected(&node.name) { "[x]" } else { "[ ]" };
    let marker = if node.mandatory { "*" } else { "" };
    println!("{}{} {}{}", "  ".repeat(depth), checkbox, node.name, marker);

    for child in &node.children {
        match child {
            FeatureChild::Feature(feature) => print_node(feature, selection, depth + 1),
            FeatureChild::Group(group) => {
                println!("{}({})", "  ".repeat(depth + 1), group.group_type);
                for member in &group.children {
                    print_node(member, selection, depth + 2);
                }
            }
        }
    }
}
