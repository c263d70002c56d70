//! Upload command
//!
//! Usage: featconf upload <FILE>
//!
//! Runs the full upload flow. When the backend reports constraints that
//! still need translation, each one is prompted for a manual boolean
//! expression (blank skips it; the backend retries its own translation),
//! then formula generation is completed.

use clap::Args;
use std::path::PathBuf;

use featconf_client::HttpModelService;
use featconf_engine::{Session, UploadStatus};

use super::prompt;

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Feature model file to upload
    pub file: PathBuf,
}

/// Execute upload command
pub fn execute(
    args: UploadArgs,
    service: HttpModelService,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(service);
    session.set_file(&args.file);

    if let UploadStatus::NeedsTranslation { untranslated } = session.upload()? {
        println!("{} constraint(s) need translation before the formula can be generated.", untranslated);

        let pending: Vec<(String, String)> = session
            .registry()
            .untranslated()
            .iter()
            .map(|c| (c.id.clone(), c.english_statement.clone()))
            .collect();

        for (id, statement) in pending {
            println!("  \"{}\"", statement);
            let expression = prompt("  boolean expression (blank to skip): ")?;
            if !expression.is_empty() {
                session.translate_manually(&id, &expression)?;
            }
        }

        session.complete_translations()?;
    }

    if let Some(formula) = session.logic_formula() {
        println!("Propositional logic formula:");
        println!("  {}", formula);
    }

    if !session.mwp_list().is_empty() {
        println!("Minimum working products:");
        for mwp in session.mwp_list() {
            println!("  {}", mwp.join(", "));
        }
    }

    if !session.registry().constraints().is_empty() {
        println!("Cross-tree constraints:");
        for constraint in session.registry().constraints() {
            println!("  {}", constraint);
        }
    }

    Ok(())
}
