//! FeatConf CLI
//!
//! Command-line driver for interactive feature-model configuration

use clap::{Parser, Subcommand};
use featconf_client::HttpModelService;
use featconf_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "featconf")]
#[command(about = "FeatConf - Feature model configuration", long_about = None)]
struct Cli {
    /// Base URL of the model collaborator backend
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Upload a model file and generate its logic formula
    Upload(commands::upload::UploadArgs),
    /// Enumerate minimum working products for a model file
    Mwp(commands::mwp::MwpArgs),
    /// Print the feature tree and its selection rules
    Visualize(commands::visualize::VisualizeArgs),
    /// Interactively configure a feature selection
    Configure(commands::configure::ConfigureArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();
    let service = HttpModelService::new(&cli.base_url);

    let result = match cli.command {
        Commands::Upload(args) => commands::upload::execute(args, service),
        Commands::Mwp(args) => commands::mwp::execute(args, service),
        Commands::Visualize(args) => commands::visualize::execute(args, service),
        Commands::Configure(args) => commands::configure::execute(args, service),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
