use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use agri_qa::config::AppConfig;
use agri_qa::console;
use agri_qa::data::{DataProvider, JsonFileProvider, StaticSeedProvider};
use agri_qa::http_server::HttpServer;
use agri_qa::logging::Logger;
use agri_qa::qa::QaSystem;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

/// Agricultural & climate data Q&A for Indian states
#[derive(Parser)]
#[command(name = "agri-qa", version)]
#[command(about = "Answer agricultural and rainfall questions about Indian states")]
struct Cli {
    /// Configuration file (defaults to agri-qa.toml or config/agri-qa.toml)
    #[arg(short, long, env = "AGRI_QA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON API
    Serve {
        /// Bind address, overrides server.bind_addr
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Answer a single question and exit
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive console (default)
    Interactive,
    /// Print a sample configuration file
    SampleConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::SampleConfig) = cli.command {
        print!("{}", AppConfig::sample_toml()?);
        return Ok(());
    }

    let config_path = cli.config.as_deref().map(|p| p.to_string_lossy().into_owned());
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    let logger = Logger::init(config.logging.clone())?;

    let provider: Box<dyn DataProvider> = match &config.data.seed_file {
        Some(path) => Box::new(JsonFileProvider::new(path.clone())),
        None => Box::new(StaticSeedProvider::new()),
    };
    info!(provider = provider.name(), "Loading dataset");

    let system = QaSystem::initialize(provider.as_ref(), config.answers.clone())
        .await
        .context("Failed to initialize Q&A system")?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.server.bind_addr.clone());
            HttpServer::new(Arc::new(system))
                .with_logger(logger)
                .with_cors(config.server.cors_permissive)
                .serve(&addr)
                .await?;
        }
        Commands::Ask { question, json } => {
            let answer = system.answer(&question.join(" "));
            if json {
                println!("{}", serde_json::to_string_pretty(&answer)?);
            } else {
                console::write_answer(&mut io::stdout().lock(), &answer)?;
            }
        }
        Commands::Interactive => {
            console::run(&system, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::SampleConfig => {}
    }

    Ok(())
}
