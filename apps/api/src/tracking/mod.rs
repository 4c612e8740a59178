pub mod handlers;
pub mod rank_source;
