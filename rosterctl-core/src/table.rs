//! Table view state machine
//!
//! `TableView` keeps the search query, the current page and the rows on
//! screen in one value. Every transition recomputes the displayed rows from
//! the member list it is handed:
//!
//! - query change: `page_slice(filter_members(list, query), page, PAGE_SIZE)`
//! - page change, source change, delete: `page_slice(list, page, PAGE_SIZE)`
//!
//! Only typing narrows the table. Paging away from a search shows the
//! unfiltered list again while the query text stays in the search box.
//!
//! Selection lives on the displayed rows only. Any recomputation starts from
//! unchecked rows, which also empties the checked set.
//!
//! Changing the query does not reset the page. A search typed while on page 3
//! shows page 3 of the filtered result, which may be empty.

use tracing::debug;

use crate::member::{Member, MemberId};
use crate::paginate::{page_count, page_slice, PageInfo, PAGE_SIZE};
use crate::provider::DataProvider;
use crate::search::filter_members;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    query: String,
    page: usize,
    displayed: Vec<Member>,
    /// Displayed rows came from the query filter rather than the full list
    filtered: bool,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            displayed: Vec::new(),
            filtered: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current 1-based page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows on screen, at most `PAGE_SIZE`
    pub fn displayed(&self) -> &[Member] {
        &self.displayed
    }

    /// The displayed rows are narrowed by a non-empty query
    pub fn is_filtered(&self) -> bool {
        self.filtered && !self.query.is_empty()
    }

    /// Displayed rows currently checked
    pub fn checked(&self) -> Vec<&Member> {
        self.displayed.iter().filter(|m| m.checked).collect()
    }

    pub fn checked_ids(&self) -> Vec<MemberId> {
        self.displayed
            .iter()
            .filter(|m| m.checked)
            .map(|m| m.id)
            .collect()
    }

    /// Number of pages for the unfiltered list
    pub fn total_pages(&self, members: &[Member]) -> usize {
        page_count(members.len(), PAGE_SIZE)
    }

    /// Summary of the current page against the list the rows were cut from
    pub fn page_info(&self, members: &[Member]) -> PageInfo {
        let total = if self.is_filtered() {
            filter_members(members, &self.query).len()
        } else {
            members.len()
        };
        PageInfo::new(self.page, PAGE_SIZE, total)
    }

    /// First/previous controls are enabled
    pub fn can_go_back(&self) -> bool {
        self.page != 1
    }

    /// Next/last controls are enabled
    ///
    /// Measured against the unfiltered list, like `last_page`.
    pub fn can_go_forward(&self, members: &[Member]) -> bool {
        self.page.saturating_mul(PAGE_SIZE) < members.len()
    }

    /// Delete control is enabled
    pub fn can_delete(&self) -> bool {
        self.displayed.iter().any(|m| m.checked)
    }

    /// The source list changed
    pub fn sync(&mut self, members: &[Member]) {
        self.refresh(members);
    }

    /// Replace the search query and filter. The page is kept as is.
    pub fn set_query(&mut self, query: impl Into<String>, members: &[Member]) {
        self.query = query.into();
        self.search(members);
    }

    pub fn next_page(&mut self, members: &[Member]) {
        self.page = self.page.saturating_add(1);
        self.refresh(members);
    }

    /// Previous page, never below 1
    pub fn prev_page(&mut self, members: &[Member]) {
        self.page = self.page.saturating_sub(1).max(1);
        self.refresh(members);
    }

    pub fn first_page(&mut self, members: &[Member]) {
        self.page = 1;
        self.refresh(members);
    }

    /// `ceil(len / PAGE_SIZE)` of the unfiltered list, or 1 when it is empty
    pub fn last_page(&mut self, members: &[Member]) {
        self.page = self.total_pages(members).max(1);
        self.refresh(members);
    }

    /// Jump straight to `page` (clamped to 1)
    pub fn go_to_page(&mut self, page: usize, members: &[Member]) {
        self.page = page.max(1);
        self.refresh(members);
    }

    /// Flip the checkbox of displayed row `id`. Rows not on screen are ignored.
    pub fn toggle(&mut self, id: MemberId) -> bool {
        match self.displayed.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.checked = !member.checked;
                true
            }
            None => false,
        }
    }

    /// Remove the checked rows from the provider, back to page 1
    ///
    /// Returns the ids that were deleted. With nothing checked the list is
    /// untouched but the page still resets.
    pub fn delete_checked(&mut self, provider: &mut DataProvider) -> Vec<MemberId> {
        let ids = self.checked_ids();
        provider.remove(&ids);
        self.page = 1;
        self.refresh(provider.members());
        ids
    }

    /// Cut the current page from the full list
    fn refresh(&mut self, members: &[Member]) {
        self.displayed = page_slice(members, self.page, PAGE_SIZE).to_vec();
        self.filtered = false;
        debug!(
            page = self.page,
            total = members.len(),
            shown = self.displayed.len(),
            "table refreshed"
        );
    }

    /// Cut the current page from the rows matching the query
    fn search(&mut self, members: &[Member]) {
        let matched = filter_members(members, &self.query);
        self.displayed = page_slice(&matched, self.page, PAGE_SIZE).to_vec();
        self.filtered = true;
        debug!(
            page = self.page,
            query = %self.query,
            matched = matched.len(),
            shown = self.displayed.len(),
            "table filtered"
        );
    }
}
