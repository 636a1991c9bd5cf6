//! Background Tasks Module
//!
//! # Tasks
//! - Cache sweep: drops expired feeds at a configured interval. Optional;
//!   lookups already expire entries lazily.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
