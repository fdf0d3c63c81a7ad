//! Main entry point for the Selection Translator CLI
//!
//! A stand-in for an editor host: the "selection" is taken from the command
//! line (or stdin) and the result dialog is a printed line.

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use selection_translator::{
    format_result, perform, TracingSink, TranslationConfig, TranslatorClient,
};

/// Selection Translator - translate camelCase selections
#[derive(Parser, Debug)]
#[command(name = "selection-translator", version, about, long_about = None)]
struct Args {
    /// Text to translate (read from stdin when omitted)
    text: Option<String>,

    /// Endpoint URL template with {0}/{1}/{2} placeholders
    /// (optional, defaults to TRANSLATOR_URL_TEMPLATE env var)
    #[arg(long)]
    url_template: Option<String>,

    /// Target language code (optional, defaults to TRANSLATOR_TARGET_LANG env var)
    #[arg(short, long)]
    target_lang: Option<String>,

    /// Source language code (optional, defaults to TRANSLATOR_SOURCE_LANG env var)
    #[arg(short, long)]
    source_lang: Option<String>,

    /// Load configuration from a JSON file instead of the environment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("selection_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Override config with CLI args if provided
    if let Some(url_template) = args.url_template {
        std::env::set_var("TRANSLATOR_URL_TEMPLATE", url_template);
    }
    if let Some(target_lang) = args.target_lang {
        std::env::set_var("TRANSLATOR_TARGET_LANG", target_lang);
    }
    if let Some(source_lang) = args.source_lang {
        std::env::set_var("TRANSLATOR_SOURCE_LANG", source_lang);
    }

    let config = match args.config {
        Some(path) => TranslationConfig::from_file(path)?,
        None => TranslationConfig::from_env()?,
    };
    let client = TranslatorClient::new(config)?;

    // The "selection": the positional argument, or piped stdin.
    let selection = match args.text {
        Some(text) => Some(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            let trimmed = buf.trim_end().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
    };

    // Failures are logged by the sink and stay silent otherwise.
    if let Some((normalized, translated)) =
        perform(selection.as_deref(), &client, &TracingSink)
    {
        println!("{}", format_result(&normalized, &translated));
    }

    Ok(())
}
