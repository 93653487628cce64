use log::debug;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use self::anchored::AnchorDelimited;
use self::block::DescriptionBlock;

mod anchored;
mod block;

/// A structured record of a single job posting page.
///
/// Every field defaults to empty: a selector that matches nothing produces an
/// incomplete record, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct JobPosting {
    pub(crate) title: String,
    pub(crate) category: String,
    pub(crate) country: String,
    pub(crate) city: String,
    pub(crate) description: Vec<String>,
    pub(crate) requirements: Vec<String>,
}

/// The free-text sections of a posting, split into bullet lines.
#[derive(Debug, Default, PartialEq)]
pub(super) struct JobBody {
    pub(super) description: Vec<String>,
    pub(super) requirements: Vec<String>,
}

/// The labelled rows of the posting's details table.
#[derive(Debug, Default, PartialEq)]
struct JobFields {
    category: String,
    country: String,
    city: String,
}

/// A strategy for pulling the description and requirements text out of a
/// posting page.
///
/// Returns None if the markup the strategy keys on is absent, so the caller
/// can try the next strategy. A Some result may still have either section
/// empty.
pub(super) trait BodyExtractor {
    const NAME: &'static str;

    fn extract(html: &str) -> Option<JobBody>;
}

/// Parses one posting page into a [`JobPosting`].
///
/// Pure: identical markup yields identical records.
pub(crate) fn extract_record(html: &str) -> JobPosting {
    let document = Html::parse_document(html);
    let fields = parse_fields(&document);
    let body = extract_body(html);

    JobPosting {
        title: parse_title(&document),
        category: fields.category,
        country: fields.country,
        city: fields.city,
        description: body.description,
        requirements: body.requirements,
    }
}

fn parse_title(document: &Html) -> String {
    let heading_selector = Selector::parse("h1.page-header").unwrap();
    document
        .select(&heading_selector)
        .next()
        .map(trimmed_text)
        .unwrap_or_default()
}

fn parse_fields(document: &Html) -> JobFields {
    let row_selector = Selector::parse(".job-view-fields tr").unwrap();
    let label_selector = Selector::parse("td.job-field").unwrap();
    let value_selector = Selector::parse("td.job-field-value").unwrap();

    let mut fields = JobFields::default();
    for row in document.select(&row_selector) {
        let Some(label) = row.select(&label_selector).next().map(trimmed_text) else {
            continue;
        };
        let value = row
            .select(&value_selector)
            .next()
            .map(trimmed_text)
            .unwrap_or_default();
        match label.as_str() {
            "Category" => fields.category = value,
            // The board labels the country row "Location".
            "Location" => fields.country = value,
            "City" => fields.city = value,
            _ => {}
        }
    }
    fields
}

fn extract_body(html: &str) -> JobBody {
    AnchorDelimited::extract(html)
        .or_else(|| {
            debug!("No section markers found, trying {}", DescriptionBlock::NAME);
            DescriptionBlock::extract(html)
        })
        .unwrap_or_default()
}

pub(super) fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_PAGE: &str = r#"
        <html><body>
        <h1 class="page-header">
            Platform Engineer
        </h1>
        <table class="job-view-fields">
            <tr><td class="job-field">Category</td><td class="job-field-value">Engineering</td></tr>
            <tr><td class="job-field">Location</td><td class="job-field-value">USA</td></tr>
            <tr><td class="job-field">City</td><td class="job-field-value">Austin</td></tr>
            <tr><td class="job-field">Salary</td><td class="job-field-value">Competitive</td></tr>
        </table>
        <h2>What you'll be doing</h2>
        <ul><li>Ship features</li><li> Operate the platform </li></ul>
        <h2>What you'll need:</h2>
        <ul><li>Kubernetes</li></ul>
        <h2>Who you are</h2>
        <ul><li>A team player</li></ul>
        </body></html>
    "#;

    #[test]
    fn title_is_the_trimmed_page_header() {
        let record = extract_record(DETAIL_PAGE);
        assert_eq!(record.title, "Platform Engineer");
    }

    #[test]
    fn missing_page_header_yields_empty_title() {
        let record = extract_record("<html><body><h1>Untyped heading</h1></body></html>");
        assert_eq!(record.title, "");
    }

    #[test]
    fn field_labels_map_onto_the_record() {
        let record = extract_record(DETAIL_PAGE);
        assert_eq!(record.category, "Engineering");
        // "Location" carries the country on this board.
        assert_eq!(record.country, "USA");
        assert_eq!(record.city, "Austin");
    }

    #[test]
    fn missing_fields_table_yields_empty_fields() {
        let record = extract_record("<html><body><p>Nothing structured</p></body></html>");
        assert_eq!(record.category, "");
        assert_eq!(record.country, "");
        assert_eq!(record.city, "");
    }

    #[test]
    fn repeated_label_keeps_the_last_value() {
        let page = r#"
            <table class="job-view-fields">
                <tr><td class="job-field">City</td><td class="job-field-value">Austin</td></tr>
                <tr><td class="job-field">City</td><td class="job-field-value">Dallas</td></tr>
            </table>
        "#;
        let record = extract_record(page);
        assert_eq!(record.city, "Dallas");
    }

    #[test]
    fn body_sections_are_the_bullets_between_markers() {
        let record = extract_record(DETAIL_PAGE);
        assert_eq!(record.description, ["Ship features", "Operate the platform"]);
        assert_eq!(record.requirements, ["Kubernetes"]);
    }

    #[test]
    fn block_fallback_runs_only_without_section_markers() {
        let page = r#"
            <html><body>
            <div class="description-info"> One paragraph about the job. </div>
            </body></html>
        "#;
        let record = extract_record(page);
        assert_eq!(record.description, ["One paragraph about the job."]);
        assert!(record.requirements.is_empty());
    }

    #[test]
    fn extract_record_is_idempotent() {
        assert_eq!(extract_record(DETAIL_PAGE), extract_record(DETAIL_PAGE));
    }
}
