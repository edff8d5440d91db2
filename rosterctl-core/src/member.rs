//! Member records as served by the remote endpoint

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable member identifier
///
/// The production endpoint serves ids as strings (`"id": "1"`) while other
/// deployments use plain numbers, so both forms are accepted on input. Output
/// is always numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(Self(n)),
            RawId::Text(s) => s
                .trim()
                .parse::<u64>()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid member id {s:?}"))),
        }
    }
}

/// One row of admin-managed personnel data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Row selection. Never part of the source data.
    #[serde(skip)]
    pub checked: bool,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            checked: false,
        }
    }

    /// Searchable text fields, in column order
    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.role]
    }
}

/// Parse a JSON array of member records
pub fn parse_members(bytes: &[u8], context: &str) -> crate::Result<Vec<Member>> {
    serde_json::from_slice(bytes).map_err(|e| crate::RosterError::decode(context, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_ids() {
        let json = br#"[
            {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
            {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin"}
        ]"#;
        let members = parse_members(json, "test").unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, MemberId(1));
        assert_eq!(members[1].role, "admin");
        assert!(members.iter().all(|m| !m.checked));
    }

    #[test]
    fn test_parse_numeric_ids() {
        let json = br#"[{"id": 42, "name": "A", "email": "a@x.com", "role": "member"}]"#;
        let members = parse_members(json, "test").unwrap();
        assert_eq!(members[0].id, MemberId(42));
    }

    #[test]
    fn test_checked_is_ignored_on_input_and_output() {
        let json = br#"[{"id": 1, "name": "A", "email": "a@x.com", "role": "member", "checked": true}]"#;
        let mut members = parse_members(json, "test").unwrap();
        assert!(!members[0].checked);

        members[0].checked = true;
        let out = serde_json::to_string(&members[0]).unwrap();
        assert!(!out.contains("checked"));
        assert!(out.contains(r#""id":1"#));
    }

    #[test]
    fn test_parse_rejects_bad_id() {
        let json = br#"[{"id": "abc", "name": "A", "email": "a@x.com", "role": "member"}]"#;
        let err = parse_members(json, "members.json").unwrap_err();
        assert!(err.to_string().contains("members.json"));
    }

    #[test]
    fn test_parse_rejects_object() {
        assert!(parse_members(br#"{"members": []}"#, "test").is_err());
    }
}
