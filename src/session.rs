//! The signed-in user as recorded in the persisted session store.
//!
//! The session is read once when a page controller is created; later changes
//! to the store are not observed.

use std::collections::HashMap;

use serde::Deserialize;

/// The key under which the session store keeps the current user.
pub const USER_KEY: &str = "user";

/// A key-value store that persists the session between page loads.
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
}

/// A [KeyValueStore] kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    items: HashMap<String, String>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.items.insert(key.to_owned(), value.into());
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

/// The kind of account the current user has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserType {
    Employee,
    Admin,
    /// Any other value, kept as is. Anonymous sessions use an empty string.
    Other(String),
}

impl From<&str> for UserType {
    fn from(value: &str) -> Self {
        match value {
            "Employee" => UserType::Employee,
            "Admin" => UserType::Admin,
            other => UserType::Other(other.to_owned()),
        }
    }
}

/// A snapshot of the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_type: UserType,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct StoredUser {
    #[serde(rename = "type", default)]
    user_type: String,
    #[serde(default)]
    email: Option<String>,
}

impl Session {
    /// A session with no signed-in user.
    pub fn anonymous() -> Self {
        Self {
            user_type: UserType::Other(String::new()),
            email: None,
        }
    }

    /// A session for an employee with the given email.
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: Some(email.into()),
        }
    }

    /// Read the current user from `store`.
    ///
    /// A missing or malformed user entry gives an anonymous session.
    pub fn read(store: &impl KeyValueStore) -> Self {
        let Some(raw_user) = store.get_item(USER_KEY) else {
            tracing::debug!("No user in the session store, using an anonymous session.");
            return Self::anonymous();
        };

        match serde_json::from_str::<StoredUser>(&raw_user) {
            Ok(user) => Self {
                user_type: UserType::from(user.user_type.as_str()),
                email: user.email,
            },
            Err(error) => {
                tracing::warn!("Could not parse the user in the session store: {error}");
                Self::anonymous()
            }
        }
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }
}

#[cfg(test)]
mod session_tests {
    use super::{InMemoryKeyValueStore, Session, USER_KEY, UserType};

    #[test]
    fn reads_employee() {
        let mut store = InMemoryKeyValueStore::new();
        store.set_item(USER_KEY, r#"{"type": "Employee", "email": "a@a"}"#);

        let session = Session::read(&store);

        assert_eq!(session, Session::employee("a@a"));
        assert!(session.is_employee());
    }

    #[test]
    fn reads_user_without_email() {
        let mut store = InMemoryKeyValueStore::new();
        store.set_item(USER_KEY, r#"{"type": "Admin"}"#);

        let session = Session::read(&store);

        assert_eq!(session.user_type, UserType::Admin);
        assert_eq!(session.email, None);
        assert!(!session.is_employee());
    }

    #[test]
    fn keeps_unknown_user_type() {
        let mut store = InMemoryKeyValueStore::new();
        store.set_item(USER_KEY, r#"{"type": "Contractor", "email": "c@c"}"#);

        let session = Session::read(&store);

        assert_eq!(session.user_type, UserType::Other("Contractor".to_owned()));
    }

    #[test]
    fn missing_user_is_anonymous() {
        let store = InMemoryKeyValueStore::new();

        assert_eq!(Session::read(&store), Session::anonymous());
    }

    #[test]
    fn malformed_user_is_anonymous() {
        let mut store = InMemoryKeyValueStore::new();
        store.set_item(USER_KEY, "Employee");

        assert_eq!(Session::read(&store), Session::anonymous());
    }

    #[test]
    fn later_writes_do_not_change_snapshot() {
        let mut store = InMemoryKeyValueStore::new();
        store.set_item(USER_KEY, r#"{"type": "Employee", "email": "a@a"}"#);
        let session = Session::read(&store);

        store.set_item(USER_KEY, r#"{"type": "Admin", "email": "b@b"}"#);

        assert_eq!(session, Session::employee("a@a"));
    }
}
