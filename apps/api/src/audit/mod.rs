// Technical audit pipeline: fetch a live page, extract DOM facts, score them.
// The fetcher does real network I/O; the scorer is a pure function over the
// extracted snapshot so every rule is unit-testable.

pub mod fetcher;
pub mod handlers;
pub mod scorer;
