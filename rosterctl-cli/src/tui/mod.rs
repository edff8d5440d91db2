//! Interactive member table
//!
//! A single-screen TUI over the member list:
//! - Search box filtering name, email and role as you type
//! - Ten rows per page with first/prev/next/last controls
//! - Per-row checkboxes and a bulk delete for the checked rows
//!
//! The member list is fetched once in the background when the table opens.

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::{App, Mode};
pub use terminal::run;
