//! Server-rendered HTML views.
//!
//! # Responsibility
//! - Turn domain records into HTML strings for the page layer.
//!
//! # Invariants
//! - All user-provided text is escaped before interpolation.

pub mod tasks_page;

pub use tasks_page::{escape_html, render_page, render_tasks_index};
