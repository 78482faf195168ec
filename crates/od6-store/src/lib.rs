//! JSON file persistence for templates, characters, and roll statistics.
//!
//! Everything lives under one caller-supplied data directory:
//! `templates/` and `characters/` hold one pretty-printed JSON file per
//! record, `statistics.json` is an append-only array of roll records.
//! All I/O is async; failures surface as [`StoreError`] without internal
//! retries.

pub mod builtin;
pub mod character_store;
pub mod error;
mod file_name;
pub mod stats_log;
pub mod template_store;

pub use character_store::CharacterStore;
pub use error::{StoreError, StoreResult};
pub use stats_log::StatsLog;
pub use template_store::TemplateStore;
