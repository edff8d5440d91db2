//! rosterctl-core - member list state for the rosterctl admin table
//!
//! This crate holds everything that does not depend on a terminal:
//! - `member`: the `Member` record as served by the remote endpoint
//! - `provider`: sources (HTTP, file) and the `DataProvider` that owns the list
//! - `search`: case-insensitive substring filter
//! - `paginate`: page slicing arithmetic
//! - `table`: the table view state machine (query, page, displayed rows, checks)
//! - `config`: `~/.rosterctl/config.toml` loading
//!
//! ```text
//! MemberSource ──fetch──▶ DataProvider ──&[Member]──▶ TableView
//!                              ▲                        │
//!                              └───── remove(ids) ◀─────┘
//! ```

pub mod config;
pub mod error;
pub mod member;
pub mod paginate;
pub mod provider;
pub mod search;
pub mod table;

pub use config::RosterConfig;
pub use error::{Result, RosterError};
pub use member::{Member, MemberId};
pub use paginate::{page_count, page_slice, PageInfo, PAGE_SIZE};
pub use provider::{DataProvider, FileSource, HttpSource, MemberSource};
pub use search::filter_members;
pub use table::TableView;
