use anyhow::Result;
use log::{debug, info};
use scraper::{Html, Selector};

use crate::browser::PageFetcher;
use crate::page_scrapers::{self, JobPosting};

/// Collects the links to individual job postings from the listing page.
///
/// Links come back in document order, duplicates included. Anchors without an
/// href are skipped.
pub(crate) fn discover_links<F: PageFetcher>(fetcher: &F, url: &str) -> Result<Vec<String>> {
    let html = fetcher.fetch(url)?;
    let document = Html::parse_document(&html);
    let link_selector = Selector::parse(".job-listing-full a").unwrap();

    Ok(document
        .select(&link_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect())
}

/// Fetches the rendered markup of one posting page.
///
/// The page url is the base url and the discovered link concatenated
/// verbatim; it is the caller's responsibility that the two compose into a
/// valid url.
pub(crate) fn fetch_page<F: PageFetcher>(fetcher: &F, base_url: &str, link: &str) -> Result<String> {
    let url = format!("{base_url}{link}");
    info!("Fetching {url}");
    fetcher.fetch(&url)
}

/// Crawls the board: discovers every posting linked from `listing_url`, then
/// fetches and extracts each one over the same session.
pub(crate) fn crawl<F: PageFetcher>(
    fetcher: &F,
    listing_url: &str,
    base_url: &str,
) -> Result<Vec<JobPosting>> {
    let links = discover_links(fetcher, listing_url)?;
    info!("Discovered {} job links", links.len());
    debug!("Job links: {links:?}");

    let mut postings = Vec::with_capacity(links.len());
    // One page at a time: the tab is shared, and extraction must only ever
    // see markup from a completed navigation.
    for link in &links {
        let html = fetch_page(fetcher, base_url, link)?;
        let posting = page_scrapers::extract_record(&html);
        info!("Extracted {:?} ({link})", posting.title);
        postings.push(posting);
    }
    Ok(postings)
}
