use clap::{Parser, Subcommand};
use log::{error, info, warn};
use news_symbol_sniffer::constants::DEFAULT_REFERENCE_FILE_PATH;
use news_symbol_sniffer::{Article, Error, SymbolDetector};
use serde::Serialize;
use std::io::{self, Write};
use std::process;

/// Detects stock symbols in news articles read as a JSON array from stdin
#[derive(Parser, Debug)]
#[command(name = "news-symbol-sniffer-cli")]
#[command(about = "Detects stock symbols in news articles and writes JSON to stdout")]
#[command(version)]
struct Cli {
    /// Path to the `EXCHANGE:SYMBOL,logoUrl` reference CSV (optionally gzipped)
    #[arg(long, global = true, default_value = DEFAULT_REFERENCE_FILE_PATH)]
    reference: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Attach the detected symbols to every article
    Detect,
    /// Keep only the articles mentioning a symbol
    Filter {
        /// Symbol to filter on (case-insensitive)
        #[arg(long)]
        symbol: String,
    },
    /// Rank symbols by the number of articles mentioning them
    Trending {
        /// Number of entries to return
        #[arg(long)]
        limit: Option<usize>,
    },
    /// One summary per detected symbol, most mentioned first
    Summary,
}

fn write_json<T: Serialize>(value: &T) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;

    Ok(())
}

fn run(cli: Cli) -> Result<(), Error> {
    let (detector, diagnostics) = SymbolDetector::from_reference_file(&cli.reference)?;

    if diagnostics.is_degraded() {
        warn!(
            "Running without reference data ({:?}); only company names and popular symbols will be detected",
            diagnostics.source
        );
    }

    // Read the articles from stdin
    let articles = Article::list_from_reader(io::stdin().lock())?;
    info!("Read {} articles", articles.len());

    match cli.command {
        Commands::Detect => write_json(&detector.detect_symbols_for_articles(&articles)),
        Commands::Filter { symbol } => {
            write_json(&detector.filter_articles_by_symbol(&articles, &symbol))
        }
        Commands::Trending { limit } => {
            let limit = limit.unwrap_or(detector.config().default_trending_limit);
            write_json(&detector.get_trending_symbols(&articles, limit))
        }
        Commands::Summary => write_json(&detector.generate_symbol_summary(&articles)),
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();

    // Argument errors exit with status 2
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
