//! Non-interactive subcommands

pub mod list;

pub use list::run_list;
