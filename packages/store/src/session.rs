//! Session store: the logged-in user's identity in client-side storage.

use crate::kv::KeyValueStore;
use crate::models::User;

/// Key for the JSON-encoded current user.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Key for the plain user email string.
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Get/set/clear of the current user over a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored user, or `None` if absent or unreadable.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.store.get(CURRENT_USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Failed to parse {} from storage: {}", CURRENT_USER_KEY, e);
                None
            }
        }
    }

    /// The user's email, falling back to the separately stored email string.
    pub fn current_email(&self) -> Option<String> {
        self.current_user()
            .map(|u| u.email)
            .or_else(|| self.store.get(USER_EMAIL_KEY))
    }

    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(CURRENT_USER_KEY, &json),
            Err(e) => tracing::warn!("Failed to encode user: {}", e),
        }
        self.store.set(USER_EMAIL_KEY, &user.email);
    }

    /// Forget the user. Other keys (the ETA cache) are left alone.
    pub fn clear(&self) {
        self.store.remove(CURRENT_USER_KEY);
        self.store.remove(USER_EMAIL_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_set_get_clear() {
        let backing = MemoryStore::new();
        let session = SessionStore::new(backing.clone());
        assert!(session.current_user().is_none());

        let user = User::new("u1", "ann@example.com", "Ann");
        session.set_user(&user);
        assert_eq!(session.current_user(), Some(user));
        assert_eq!(backing.get(USER_EMAIL_KEY).as_deref(), Some("ann@example.com"));

        backing.set("eta_t1", "{}");
        session.clear();
        assert!(session.current_user().is_none());
        assert!(session.current_email().is_none());
        assert!(backing.get("eta_t1").is_some());
    }

    #[test]
    fn test_corrupt_user_reads_as_none() {
        let backing = MemoryStore::new();
        backing.set(CURRENT_USER_KEY, "not-json");
        backing.set(USER_EMAIL_KEY, "left@over.io");

        let session = SessionStore::new(backing);
        assert!(session.current_user().is_none());
        assert_eq!(session.current_email().as_deref(), Some("left@over.io"));
    }
}
