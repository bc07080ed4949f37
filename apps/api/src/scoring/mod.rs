// Fit scoring: deterministic keyword overlap plus an optional LLM tier that
// always falls back to it.

pub mod fit_scoring;
pub mod handlers;
pub mod llm_scorer;
pub mod prompts;
