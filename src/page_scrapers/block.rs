use scraper::{Html, Selector};

use super::{trimmed_text, BodyExtractor, JobBody};

/// The older single-block layout: the whole posting body sits in one
/// `.description-info` element, with no marker phrases to slice on and no
/// separate requirements section.
#[derive(Default)]
pub(super) struct DescriptionBlock;

impl BodyExtractor for DescriptionBlock {
    const NAME: &'static str = "description-block";

    fn extract(html: &str) -> Option<JobBody> {
        let block_selector = Selector::parse(".description-info").unwrap();
        let document = Html::parse_document(html);
        let text = document.select(&block_selector).next().map(trimmed_text)?;
        Some(JobBody {
            description: vec![text],
            requirements: Vec::new(),
        })
    }
}
