//! Summa CLI - webpage and document summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use summa_engine::{
    agent, normalize, setup_logging, source, Config, Focus, LengthPreference, LocalProvider,
    ProviderPort, Strategy, Summarizer,
};

#[derive(Parser)]
#[command(name = "summa")]
#[command(author, version, about = "Summarise webpages and documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a URL, a file, or stdin
    Summarise {
        /// URL or file path; reads stdin when omitted or "-"
        input: Option<String>,
        /// short, medium or long
        #[arg(short, long)]
        length: Option<String>,
        /// extractive, abstractive or hybrid
        #[arg(short, long)]
        strategy: Option<String>,
        /// main, conclusion or key_points
        #[arg(short, long)]
        focus: Option<String>,
        /// Show the cleaned text instead of a summary
        #[arg(long)]
        raw: bool,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Summarise {
            input,
            length,
            strategy,
            focus,
            raw,
        } => {
            let content = source::load(input.as_deref()).await?;
            let title = content
                .title
                .clone()
                .unwrap_or_else(|| content.origin.clone());

            if raw {
                let cleaned = normalize::normalize(&content.text);
                println!("\n=== {} ===\n", title.bold());
                println!("{}", cleaned);
                println!(
                    "\n--- {} words after cleanup ---",
                    cleaned.split_whitespace().count()
                );
                return Ok(());
            }

            let engine = &config.engine;
            let length = length
                .as_deref()
                .map(LengthPreference::from_name)
                .unwrap_or(engine.length);
            let strategy = strategy
                .as_deref()
                .map(Strategy::from_name)
                .unwrap_or(engine.strategy);
            let focus = focus.as_deref().map(Focus::from_name).unwrap_or(engine.focus);

            let provider: Box<dyn ProviderPort> = match agent::build_provider(&config) {
                Ok(provider) => provider,
                Err(e) => {
                    eprintln!("{} {}; summarising locally", "Warning:".yellow(), e);
                    Box::new(LocalProvider)
                }
            };

            eprintln!(
                "Summarising {} words ({}, {}, {})...",
                normalize::word_count(&content.text),
                strategy,
                length,
                focus
            );

            let summarizer = Summarizer::new(config.engine.clone());
            let summary = summarizer
                .summarize_focused(
                    &content.text,
                    focus,
                    length,
                    strategy,
                    Some(&*provider),
                )
                .await?;

            println!("=== {} ===\n", title.bold());
            println!("{}", summary);
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
