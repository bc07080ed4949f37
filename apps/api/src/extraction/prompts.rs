// LLM prompt constants for job-posting extraction.

use crate::llm_client::prompts::json_system;

pub fn extract_system() -> String {
    json_system(
        "You are a precise job posting parser. You read the text of a job posting page \
        and extract its key fields exactly as stated, never guessing.",
    )
}

/// Replace `{url}` and `{content}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the job details from this job posting page.

URL: {url}

PAGE CONTENT:
{content}

Return a JSON object with this EXACT shape:
{
  "company": "Hiring company name",
  "position": "Job title",
  "salary": "Annual salary or range as written, or null",
  "hourlyRate": "Hourly pay or range as written, or null",
  "jobDescription": "Concise summary of responsibilities and requirements, or null",
  "location": "City/region and remote/hybrid status, or null",
  "employmentType": "Full-time, Part-time, Contract, Internship or Temporary, or null"
}

Rules:
- Prefer JSON-LD JobPosting data when present.
- Use null for any field the page does not state. Do NOT invent values.
- Use the company's name, not the job board's (e.g. not "LinkedIn" or "Indeed").
- Keep "position" to the job title only, without the company or location."#;

pub fn build_extract_prompt(url: &str, content: &str) -> String {
    EXTRACT_PROMPT_TEMPLATE
        .replace("{url}", url)
        .replace("{content}", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_url_and_content() {
        let prompt = build_extract_prompt("https://jobs.example.com/1", "TITLE: Rust Engineer");
        assert!(prompt.contains("URL: https://jobs.example.com/1"));
        assert!(prompt.contains("TITLE: Rust Engineer"));
        assert!(!prompt.contains("{url}"));
        assert!(!prompt.contains("{content}"));
    }

    #[test]
    fn test_system_prompt_demands_json() {
        assert!(extract_system().contains("valid JSON only"));
    }
}
