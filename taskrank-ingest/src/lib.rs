//! taskrank-ingest: task table import (validated), export, and file edits.

pub mod error;
pub mod export;
pub mod import;
pub mod store;

pub use error::ImportError;
pub use export::{write_prioritized, write_prioritized_to, write_tasks, write_tasks_to, DEFAULT_EXPORT_FILE};
pub use import::{read_tasks, read_tasks_from};
pub use store::{append_task, load_or_empty, mark_completed};
