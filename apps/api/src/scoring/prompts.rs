// LLM prompt constants for fit scoring. The reply is free text, parsed with
// regexes in llm_scorer.rs, so the prompt pins the two labelled lines.

pub const FIT_SCORE_SYSTEM: &str = "You are an experienced technical recruiter. \
    You compare a candidate's skills with a job description and answer concisely \
    in exactly the format requested.";

/// Replace `{job_description}`, `{skills}` and `{summary}` before sending.
pub const FIT_SCORE_PROMPT_TEMPLATE: &str = r#"Compare the candidate profile with the job description.

JOB DESCRIPTION:
{job_description}

CANDIDATE SKILLS:
{skills}

CANDIDATE SUMMARY:
{summary}

Answer with exactly these two lines and nothing else:
Fit Score: <integer from 0 to 100>
Missing Keywords: <comma-separated list of important job keywords the candidate lacks, or "none">"#;
