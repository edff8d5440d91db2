//! Case-insensitive substring filter over name, email and role

use crate::member::Member;

/// Members whose name, email or role contains `query`, ignoring case
///
/// Order is preserved. An empty query returns the whole list.
pub fn filter_members(members: &[Member], query: &str) -> Vec<Member> {
    if query.is_empty() {
        return members.to_vec();
    }

    let query_lower = query.to_lowercase();
    members
        .iter()
        .filter(|member| matches(member, &query_lower))
        .cloned()
        .collect()
}

/// `query_lower` must already be lowercased
fn matches(member: &Member, query_lower: &str) -> bool {
    member
        .fields()
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}
