use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use url::Url;

use crate::browser::BrowserSession;

mod browser;
mod crawler;
mod page_scrapers;

/// Crawl a job board and extract a structured record from every posting
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Url of the page listing the job postings
    #[arg(short, long)]
    url: String,

    /// Base url prepended to every discovered job link
    #[arg(short, long)]
    base: String,

    /// File the scraped postings are written to, as JSON
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    Url::parse(&args.url).context("The url with job listings must be an absolute url")?;

    info!("Starting crawl of {}", args.url);
    let listing_url = args.url.clone();
    let base_url = args.base.clone();
    // headless_chrome is a blocking API, so the whole crawl runs on a
    // blocking thread. The session lives inside the closure and is closed
    // when it returns, whether the crawl succeeded or not.
    let postings = tokio::task::spawn_blocking(move || {
        let session = BrowserSession::launch()?;
        crawler::crawl(&session, &listing_url, &base_url)
    })
    .await
    .context("Crawl task panicked")??;

    let json = serde_json::to_string_pretty(&postings)?;
    tokio::fs::write(&args.output, json)
        .await
        .with_context(|| format!("Failed to write postings to {}", args.output.display()))?;
    info!("Wrote {} postings to {}", postings.len(), args.output.display());

    Ok(())
}
