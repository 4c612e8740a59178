// Backlink management: LLM-backed opportunity discovery plus the review
// workflow over persisted rows (pending → approved|rejected).

pub mod discovery;
pub mod handlers;
pub mod prompts;
