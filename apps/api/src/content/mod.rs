// Content relay: analyze / optimize / generate. Pure delegation to the LLM;
// prompts embed the target keywords, answers are decoded fail-closed.

pub mod handlers;
pub mod prompts;
pub mod relay;
