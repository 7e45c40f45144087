//! Unique test data so tests sharing one directory never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `{prefix}-{ulid}@example.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}

/// A player name that fits the 32 character limit: the prefix plus the
/// random tail of a ULID.
pub fn unique_name(prefix: &str) -> String {
    let ulid = Ulid::new().to_string();
    let tail = &ulid[ulid.len() - 8..];
    let mut name = format!("{prefix}{tail}");
    name.truncate(32);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_values_differ() {
        assert_ne!(unique_str("game"), unique_str("game"));
        assert_ne!(unique_email("p"), unique_email("p"));
        assert!(unique_email("p").ends_with("@example.test"));
    }

    #[test]
    fn unique_name_is_bounded() {
        let name = unique_name("a-rather-long-player-name-prefix-");
        assert!(name.chars().count() <= 32);
        assert!(unique_name("ana").starts_with("ana"));
    }
}
