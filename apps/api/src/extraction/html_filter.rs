//! Reduces a posting page to the parts an extractor needs: structured data,
//! title and meta, headers, and elements whose class or id hints at pay,
//! location or the job itself.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::text::{collapse_whitespace, truncate_chars};

/// Class/id fragments that mark job-relevant elements.
pub const RELEVANT_HINTS: &[&str] = &[
    "salary",
    "pay",
    "compensation",
    "benefits",
    "location",
    "job",
    "position",
    "description",
];

/// Below this the filtered view is too thin to trust; use the whole body.
const MIN_FILTERED_CHARS: usize = 200;
/// Per-element cap so one giant wrapper cannot crowd out the rest.
const MAX_ELEMENT_CHARS: usize = 2_000;

const META_SELECTOR: &str = "meta[name='description'], meta[property='og:title'], \
    meta[property='og:description'], meta[property='og:site_name']";

/// Builds the LLM input for a page, pre-filtered or not, within `max_chars`.
pub fn page_content(html: &str, prefilter: bool, max_chars: usize) -> String {
    let content = if prefilter {
        let filtered = prefilter_html(html);
        if filtered.chars().count() >= MIN_FILTERED_CHARS {
            filtered
        } else {
            body_text(html)
        }
    } else {
        body_text(html)
    };
    truncate_chars(&content, max_chars).to_string()
}

/// Job-relevant sections of a page, labelled, in a fixed order.
pub fn prefilter_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut sections: Vec<String> = Vec::new();

    let json_ld = select_all(&document, "script[type='application/ld+json']")
        .map(|el| el.inner_html().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    if !json_ld.is_empty() {
        sections.push(format!("JSON-LD:\n{}", json_ld.join("\n")));
    }

    if let Some(title) = select_all(&document, "title")
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .find(|t| !t.is_empty())
    {
        sections.push(format!("TITLE: {title}"));
    }

    let meta = select_all(&document, META_SELECTOR)
        .filter_map(|el| el.value().attr("content"))
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    if !meta.is_empty() {
        sections.push(format!("META:\n{}", meta.join("\n")));
    }

    let mut seen: HashSet<String> = HashSet::new();

    let headers = select_all(&document, "h1, h2, h3")
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect::<Vec<_>>();
    if !headers.is_empty() {
        sections.push(format!("HEADERS:\n{}", headers.join("\n")));
    }

    let relevant = select_all(&document, &relevant_selector())
        .map(|el| element_text(&el))
        .filter(|t| t.len() > 2 && seen.insert(t.clone()))
        .collect::<Vec<_>>();
    if !relevant.is_empty() {
        sections.push(format!("RELEVANT SECTIONS:\n{}", relevant.join("\n")));
    }

    sections.join("\n\n")
}

/// Visible text of the whole page, whitespace-collapsed.
pub fn body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let text = select_all(&document, "body")
        .next()
        .map(|body| body.text().collect::<Vec<_>>().join(" "))
        .unwrap_or_else(|| document.root_element().text().collect::<Vec<_>>().join(" "));
    collapse_whitespace(&text)
}

fn relevant_selector() -> String {
    RELEVANT_HINTS
        .iter()
        .map(|hint| format!("[class*='{hint}'], [id*='{hint}']"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn element_text(el: &scraper::ElementRef<'_>) -> String {
    let text = collapse_whitespace(&el.text().collect::<Vec<_>>().join(" "));
    truncate_chars(&text, MAX_ELEMENT_CHARS).to_string()
}

/// Selects with a selector string; an unparsable selector selects nothing.
fn select_all<'a>(
    document: &'a Html,
    selector: &str,
) -> impl Iterator<Item = scraper::ElementRef<'a>> + 'a {
    let selector = Selector::parse(selector).ok();
    let elements: Vec<scraper::ElementRef<'a>> = match &selector {
        Some(s) => document.select(s).collect(),
        None => Vec::new(),
    };
    elements.into_iter()
}
