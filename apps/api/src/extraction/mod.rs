// Job-posting field extraction: one page fetch, an HTML pre-filter, one LLM call.
// All LLM calls go through llm_client.

pub mod extractor;
pub mod fetcher;
pub mod handlers;
pub mod html_filter;
pub mod prompts;
