//! Shared application state: the demo user directory.

use std::collections::HashMap;
use std::sync::Arc;

/// Identifier that is reserved and never present in the directory.
pub const RESERVED_USER_ID: &str = "007";

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    users: Arc<HashMap<String, String>>,
}

impl AppState {
    /// Build the state with the fixed demo user directory.
    pub fn seeded() -> Self {
        let users = [
            ("001", "Wai Foong"),
            ("002", "Jane Riley"),
            ("003", "Marcus Holt"),
            ("004", "Priya Nair"),
            ("005", "Kenneth Law"),
        ]
        .into_iter()
        .map(|(id, name)| (id.to_owned(), name.to_owned()))
        .collect();

        Self {
            users: Arc::new(users),
        }
    }

    /// Look up a user's display name by id.
    pub fn lookup_user(&self, id: &str) -> Option<&str> {
        self.users.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_five_entries() {
        let state = AppState::seeded();
        assert_eq!(state.users.len(), 5);
    }

    #[test]
    fn known_id_resolves() {
        let state = AppState::seeded();
        assert_eq!(state.lookup_user("001"), Some("Wai Foong"));
    }

    #[test]
    fn reserved_id_is_not_in_the_directory() {
        let state = AppState::seeded();
        assert_eq!(state.lookup_user(RESERVED_USER_ID), None);
    }
}
