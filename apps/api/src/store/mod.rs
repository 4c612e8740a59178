//! Keyed CRUD over the relational schema. One submodule per entity.
//!
//! Queries are plain runtime `query_as` calls (no compile-time macros) and
//! never span entities transactionally; last writer wins on updates.

pub mod audits;
pub mod backlinks;
pub mod competitors;
pub mod content;
pub mod keywords;
pub mod local_seo;
pub mod websites;
