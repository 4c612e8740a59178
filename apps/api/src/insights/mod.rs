// LLM-delegated advisory endpoints: on-page analysis, competitor analysis,
// local-SEO task generation, social post generation. All answers decode into
// typed shapes that fail closed on contract breaks.

pub mod handlers;
pub mod prompts;
