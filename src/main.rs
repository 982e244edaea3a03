//! keyfacet command-line entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use keyfacet::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// keyfacet: ontology-driven keyword extraction
#[derive(Parser, Debug)]
#[command(name = "keyfacet")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ontology class file (JSON); overrides ontology.path from the config
    #[arg(long, global = true)]
    ontology: Option<PathBuf>,

    /// Enable JSON logging format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract keywords from a JSON array of documents
    Extract {
        /// Input file: [{"id": ..., "title": ..., "text": ...}, ...]
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the facet an ontology class resolves to
    Resolve {
        /// Class IRI
        class: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.json_logs);

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match args.command {
        Command::Extract { input, output } => {
            let report = cli::extract(config, args.ontology, input, output).await?;
            cli::print_batch_summary(&report);
        }
        Command::Resolve { class, json } => {
            let result = cli::resolve(&config, args.ontology, class)?;
            cli::print_resolve_result(&result, json)?;
        }
    }

    Ok(())
}
