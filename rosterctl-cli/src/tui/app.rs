//! Core application state and mode management

use rosterctl_core::{DataProvider, Member, TableView};

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate rows and pages, toggle checkboxes, delete
    #[default]
    Normal,
    /// Typing into the search box
    Search,
}

/// Main application state
///
/// The provider owns the member list; the table view owns query, page and
/// displayed rows. Everything here is mutated only from the event loop.
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Member list for this session
    pub provider: DataProvider,
    /// Query, page and displayed rows
    pub table: TableView,
    /// Highlighted row within the displayed page
    pub cursor: usize,
    /// Where members come from, shown in the title
    pub source_label: String,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App with an empty member list
    pub fn new(source_label: impl Into<String>) -> Self {
        let provider = DataProvider::new();
        let mut table = TableView::new();
        table.sync(provider.members());
        Self {
            mode: Mode::Normal,
            provider,
            table,
            cursor: 0,
            source_label: source_label.into(),
            status_message: None,
        }
    }

    /// Completion of the initial fetch
    pub fn on_members_loaded(&mut self, result: rosterctl_core::Result<Vec<Member>>) {
        self.provider.receive(result);
        self.table.sync(self.provider.members());
        self.clamp_cursor();
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Enter search mode, keeping the current query
    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
    }

    /// Exit current mode back to normal
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Append a character to the query
    pub fn search_insert(&mut self, c: char) {
        let mut query = self.table.query().to_string();
        query.push(c);
        self.set_query(query);
    }

    /// Delete the last character of the query
    pub fn search_backspace(&mut self) {
        let mut query = self.table.query().to_string();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    /// Clear the whole query
    pub fn search_clear(&mut self) {
        if !self.table.query().is_empty() {
            self.set_query(String::new());
        }
    }

    fn set_query(&mut self, query: String) {
        self.table.set_query(query, self.provider.members());
        self.clamp_cursor();
    }

    /// Select next row (wraps)
    pub fn select_next(&mut self) {
        let len = self.table.displayed().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Select previous row (wraps)
    pub fn select_prev(&mut self) {
        let len = self.table.displayed().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Member under the cursor
    pub fn selected_member(&self) -> Option<&Member> {
        self.table.displayed().get(self.cursor)
    }

    /// Flip the checkbox of the highlighted row
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_member().map(|m| m.id) {
            self.table.toggle(id);
        }
    }

    /// Bulk delete the checked rows
    pub fn delete_checked(&mut self) {
        if !self.table.can_delete() {
            self.set_status("Nothing selected");
            return;
        }
        let deleted = self.table.delete_checked(&mut self.provider);
        self.cursor = 0;
        self.set_status(format!("Deleted {} member(s)", deleted.len()));
    }

    pub fn next_page(&mut self) {
        if self.table.can_go_forward(self.provider.members()) {
            self.table.next_page(self.provider.members());
            self.cursor = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.table.can_go_back() {
            self.table.prev_page(self.provider.members());
            self.cursor = 0;
        }
    }

    pub fn first_page(&mut self) {
        if self.table.can_go_back() {
            self.table.first_page(self.provider.members());
            self.cursor = 0;
        }
    }

    pub fn last_page(&mut self) {
        if self.table.can_go_forward(self.provider.members()) {
            self.table.last_page(self.provider.members());
            self.cursor = 0;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.table.displayed().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
