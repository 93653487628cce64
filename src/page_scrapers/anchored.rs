use regex::Regex;
use scraper::{Html, Selector};

use super::{trimmed_text, BodyExtractor, JobBody};

const DESCRIPTION_START: &str = "What you'll be doing";
const DESCRIPTION_END: &str = "What you'll need:";
const REQUIREMENTS_START: &str = "What you'll need";
const REQUIREMENTS_END: &str = "Who you are";

/// Anchor-delimited extraction: slices the raw markup between literal marker
/// phrases and reads the bullet list inside each slice.
///
/// The markers are matched against unparsed text, so this works on boards
/// whose section headings carry no usable structure. Each slice is reparsed
/// as a fragment and its `li` texts collected in document order. A missing
/// marker pair empties that section only; the strategy is inapplicable when
/// neither pair matches.
#[derive(Default)]
pub(super) struct AnchorDelimited;

impl AnchorDelimited {
    fn span_between(html: &str, start: &str, end: &str) -> Option<String> {
        let pattern = format!("(?s){}(.*?){}", regex::escape(start), regex::escape(end));
        Regex::new(&pattern)
            .unwrap()
            .captures(html)
            .and_then(|captures| captures.get(1))
            .map(|span| span.as_str().to_string())
    }

    fn list_items(span: &str) -> Vec<String> {
        let item_selector = Selector::parse("li").unwrap();
        Html::parse_fragment(span)
            .select(&item_selector)
            .map(trimmed_text)
            .collect()
    }
}

impl BodyExtractor for AnchorDelimited {
    const NAME: &'static str = "anchor-delimited";

    fn extract(html: &str) -> Option<JobBody> {
        let description = Self::span_between(html, DESCRIPTION_START, DESCRIPTION_END);
        let requirements = Self::span_between(html, REQUIREMENTS_START, REQUIREMENTS_END);
        if description.is_none() && requirements.is_none() {
            return None;
        }
        Some(JobBody {
            description: description.as_deref().map(Self::list_items).unwrap_or_default(),
            requirements: requirements.as_deref().map(Self::list_items).unwrap_or_default(),
        })
    }
}
