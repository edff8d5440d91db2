use proptest::prelude::*;
use rosterctl_core::{filter_members, page_count, page_slice, DataProvider, Member, TableView, PAGE_SIZE};

fn arb_member() -> impl Strategy<Value = (String, String, String)> {
    (
        "[A-Za-z ]{0,12}",
        "[a-z]{1,8}@[a-z]{1,5}\\.com",
        prop_oneof![Just("admin".to_string()), Just("member".to_string()), "[A-Za-z]{0,6}"],
    )
}

fn arb_members() -> impl Strategy<Value = Vec<Member>> {
    prop::collection::vec(arb_member(), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, email, role))| Member::new(i as u64 + 1, name, email, role))
            .collect()
    })
}

proptest! {
    /// Property: filter keeps source order and only returns matching rows
    #[test]
    fn prop_filter_is_ordered_matching_subsequence(members in arb_members(), query in "[A-Za-z@.]{0,3}") {
        let filtered = filter_members(&members, &query);
        let needle = query.to_lowercase();

        // Subsequence: ids strictly increase because source ids do
        prop_assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));

        for member in &filtered {
            prop_assert!(members.contains(member));
            prop_assert!(member
                .fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle)));
        }

        // Nothing matching was left out
        let expected = members
            .iter()
            .filter(|m| m.fields().iter().any(|f| f.to_lowercase().contains(&needle)))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// Property: empty query is the identity
    #[test]
    fn prop_empty_query_is_identity(members in arb_members()) {
        prop_assert_eq!(filter_members(&members, ""), members);
    }

    /// Property: page slices match the index arithmetic
    #[test]
    fn prop_page_slice_bounds(len in 0usize..200, page in 1usize..30) {
        let items: Vec<usize> = (0..len).collect();
        let slice = page_slice(&items, page, PAGE_SIZE);
        let start = (page - 1) * PAGE_SIZE;

        prop_assert!(slice.len() <= PAGE_SIZE);
        if start >= len {
            prop_assert!(slice.is_empty());
        } else {
            let end = (page * PAGE_SIZE).min(len);
            prop_assert_eq!(slice, &items[start..end]);
        }
    }

    /// Property: every item appears on exactly one page in 1..=page_count
    #[test]
    fn prop_pages_partition_list(len in 0usize..200) {
        let items: Vec<usize> = (0..len).collect();
        let pages = page_count(len, PAGE_SIZE);
        let joined: Vec<usize> = (1..=pages)
            .flat_map(|p| page_slice(&items, p, PAGE_SIZE).to_vec())
            .collect();
        prop_assert_eq!(joined, items);
    }

    /// Property: the displayed page never exceeds the page size
    #[test]
    fn prop_displayed_bounded(members in arb_members(), steps in prop::collection::vec(0u8..4, 0..12)) {
        let mut table = TableView::new();
        table.sync(&members);
        for step in steps {
            match step {
                0 => table.next_page(&members),
                1 => table.prev_page(&members),
                2 => table.last_page(&members),
                _ => table.first_page(&members),
            }
            prop_assert!(table.displayed().len() <= PAGE_SIZE);
            prop_assert!(table.page() >= 1);
        }
    }

    /// Property: deleting with nothing checked only resets the page
    #[test]
    fn prop_empty_delete_is_idempotent(members in arb_members(), page in 1usize..8) {
        let mut provider = DataProvider::with_members(members.clone());
        let mut table = TableView::new();
        table.go_to_page(page, provider.members());

        let deleted = table.delete_checked(&mut provider);
        prop_assert!(deleted.is_empty());
        prop_assert_eq!(provider.members(), members.as_slice());
        prop_assert_eq!(table.page(), 1);
        prop_assert_eq!(table.displayed(), page_slice(&members, 1, PAGE_SIZE));
    }
}
