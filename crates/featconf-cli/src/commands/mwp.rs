//! MWP command
//!
//! Usage: featconf mwp <FILE>

use clap::Args;
use std::path::PathBuf;

use featconf_client::HttpModelService;
use featconf_engine::Session;

#[derive(Debug, Args)]
pub struct MwpArgs {
    /// Feature model file to analyze
    pub file: PathBuf,
}

/// Execute mwp command
pub fn execute(args: MwpArgs, service: HttpModelService) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(service);
    session.set_file(&args.file);

    let mwps = session.find_mwp()?;
    if mwps.is_empty() {
        println!("No minimum working products found.");
        return Ok(());
    }

    println!("Minimum working products:");
    for (index, mwp) in mwps.iter().enumerate() {
        println!("  {}. {}", index + 1, mwp.join(", "));
    }

    Ok(())
}
