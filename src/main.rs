mod extract;
mod record;
mod views;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scraper::Html;
use tracing::info;

use record::Record;

#[derive(Parser)]
#[command(name = "game_catalog", about = "Extract and sort game records from an HTML catalog")]
struct Cli {
    /// HTML catalog file to load
    #[arg(default_value = "data/video_games.html")]
    file: PathBuf,

    /// Expected number of catalog entries
    #[arg(short, long, default_value_t = 100)]
    expect: usize,

    /// Rows to show per view
    #[arg(short = 'n', long, default_value_t = 5)]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let html = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read catalog file {}", cli.file.display()))?;
    let doc = Html::parse_document(&html);

    let extractor = extract::Extractor::new()?;
    let records = extractor.extract_exact(&doc, cli.expect)?;
    info!("Loaded {} records from {}", records.len(), cli.file.display());

    println!("Total records: {}", records.len());
    print_view("By name", &views::by_name(&records), cli.limit);
    print_view("Most expensive", &views::by_price(&records), cli.limit);
    print_view("Top rated", &views::by_rating(&records), cli.limit);

    Ok(())
}

fn print_view(title: &str, records: &[Record], limit: usize) {
    println!("\n--- {} ---", title);
    for r in records.iter().take(limit) {
        println!("{}", r);
    }
}
