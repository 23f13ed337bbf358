//! EcoShare Control - CLI for the EcoShare advice engine
//!
//! Decodes classifier output, cycles reuse/recycle/donate tips and drafts
//! donation listings from the terminal.

mod commands;
mod display;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::Runtime;
use ecoshare_common::catalog::AdviceCategory;
use ecoshare_common::config::EcoshareConfig;
use ecoshare_common::describe::EstimatedCondition;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecosharectl")]
#[command(about = "EcoShare - reuse, recycle and donate advice for classified items", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/ecoshare/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Advice catalog TOML, overrides the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Description suggestions TOML, overrides the configured one
    #[arg(long, global = true)]
    descriptions: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tips served for repeated classifications of a label
    Advise {
        /// Classifier label (e.g. Shoes, Plastic)
        label: String,

        /// Only one category: reuse, recycle or donate
        #[arg(long)]
        category: Option<AdviceCategory>,

        /// Number of classification events to simulate
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Suggest listing descriptions for a label
    Describe {
        label: String,

        /// good or fair (default: estimated from the label)
        #[arg(long)]
        condition: Option<EstimatedCondition>,
    },

    /// Decode classifier scores into a prediction, tips and a donation draft
    Classify {
        /// One score per label, in label-table order
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        scores: Vec<f32>,
    },

    /// Read labels from stdin, one classification event per line
    Session,

    /// List classifier labels
    Labels,

    /// Advice catalog tools
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Load and validate a catalog
    Check {
        /// Catalog file (default: the active catalog)
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => EcoshareConfig::load_from(path)?,
        None => EcoshareConfig::load()?,
    };

    // A file given to `catalog check` is checked without the configured catalogs
    if let Commands::Catalog {
        action: CatalogAction::Check { path: Some(path) },
    } = &cli.command
    {
        return commands::catalog_check_file(path, cli.json || config.output.json);
    }

    let rt = Runtime::load(config, cli.catalog, cli.descriptions, cli.json)?;

    match cli.command {
        Commands::Advise {
            label,
            category,
            count,
        } => commands::advise(&rt, &label, category, count),
        Commands::Describe { label, condition } => commands::describe(&rt, &label, condition),
        Commands::Classify { scores } => commands::classify(&rt, &scores),
        Commands::Session => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            commands::session(&rt, stdin.lock(), stdout.lock()).map(|_| ())
        }
        Commands::Labels => commands::list_labels(&rt),
        Commands::Catalog {
            action: CatalogAction::Check { path },
        } => match path {
            Some(path) => commands::catalog_check_file(&path, rt.json),
            None => commands::catalog_check(&rt.catalog, rt.json),
        },
        Commands::Config {
            action: ConfigAction::Show,
        } => commands::config_show(&rt),
    }
}
