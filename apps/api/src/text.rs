//! Text normalization shared by fit scoring and posting extraction.

/// Words dropped from keyword sets: grammar glue plus the boilerplate every
/// job posting carries.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "your", "our", "all", "any", "can",
    "has", "have", "had", "was", "were", "will", "would", "could", "should", "may", "must",
    "been", "being", "this", "that", "these", "those", "with", "from", "into", "about",
    "who", "what", "their", "they", "them", "its", "also", "such", "looking", "experience",
    "work", "working", "team", "join", "role", "ability", "strong", "years",
];

/// Lowercases, strips non-word characters, splits on whitespace, drops short
/// tokens and stop words, and de-duplicates in order of first appearance.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for token in normalized.split_whitespace() {
        if token.len() <= 2 || STOP_WORDS.contains(&token) {
            continue;
        }
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// Bidirectional substring containment. Deliberately loose so that
/// "develop" and "developer" count as the same skill.
pub fn keywords_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Collapses runs of whitespace (including newlines) to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

const COMPANY_SUFFIXES: &[&str] = &[
    "careers", "jobs", "job board", "linkedin", "indeed", "glassdoor", "hiring",
];

const COMPANY_PREFIXES: &[&str] = &["careers at ", "jobs at ", "work at ", "join "];

/// Removes job-board chrome from a company name:
/// "Careers at Acme | LinkedIn" -> "Acme".
pub fn clean_company(raw: &str) -> String {
    let mut name = collapse_whitespace(raw);

    // "Acme | LinkedIn", "Acme - Careers"
    for sep in [" | ", " - ", " – ", " — "] {
        if let Some((head, tail)) = name.split_once(sep) {
            let tail_lower = tail.to_lowercase();
            if COMPANY_SUFFIXES.iter().any(|s| tail_lower.contains(s)) {
                name = head.to_string();
            }
        }
    }

    let lower = name.to_ascii_lowercase();
    for prefix in COMPANY_PREFIXES {
        if lower.starts_with(prefix) {
            name = name[prefix.len()..].to_string();
            break;
        }
    }

    name.trim_matches(|c: char| c.is_whitespace() || c == ',' || c == '|' || c == '-')
        .to_string()
}

/// Strips trailing company/board segments and hiring noise from a position
/// title: "Senior Engineer at Acme | LinkedIn" -> "Senior Engineer".
pub fn clean_title(raw: &str) -> String {
    let mut title = collapse_whitespace(raw);

    if let Some((head, _)) = title.split_once(" | ") {
        if !head.trim().is_empty() {
            title = head.to_string();
        }
    }
    for sep in [" - ", " – ", " — "] {
        if let Some((head, tail)) = title.split_once(sep) {
            let tail_lower = tail.to_lowercase();
            if COMPANY_SUFFIXES.iter().any(|s| tail_lower.contains(s)) {
                title = head.to_string();
            }
        }
    }

    if let Some(idx) = title.to_ascii_lowercase().rfind(" at ") {
        if idx > 0 {
            title.truncate(idx);
        }
    }

    let lower = title.to_ascii_lowercase();
    for noise in ["job application for ", "apply for ", "hiring: ", "now hiring "] {
        if lower.starts_with(noise) {
            title = title[noise.len()..].to_string();
            break;
        }
    }

    title.trim().to_string()
}
