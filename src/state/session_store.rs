//! Durable mirror of the session in key-value storage.
//!
//! DESIGN
//! ======
//! Two keys, written by the session provider only:
//! - `isAuthenticated`: the literal `"true"` while signed in, absent otherwise
//! - `user`: JSON `{ "email": ..., "name"?: ... }`, absent otherwise
//!
//! Anything else found under those keys reads as signed out. Missing storage
//! can only ever cost the user a re-login, never grant a session.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::error::StorageError;
use crate::state::session::User;
use crate::util::storage::KeyValueStore;

pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
pub const USER_KEY: &str = "user";
const AUTH_FLAG_VALUE: &str = "true";

pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted user, if storage describes a signed-in session.
    ///
    /// A corrupt user record is removed along with the flag and reads as
    /// signed out.
    pub fn load(&self) -> Option<User> {
        let flag = self.read(AUTH_FLAG_KEY)?;
        if flag != AUTH_FLAG_VALUE {
            log::debug!("session flag present but not set: {flag:?}");
            return None;
        }
        let raw = self.read(USER_KEY).filter(|r| !r.is_empty())?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("discarding unreadable stored user: {e}");
                if let Err(e) = self.clear() {
                    log::warn!("failed to clear corrupt session: {e}");
                }
                None
            }
        }
    }

    /// Write `user` and then the flag.
    ///
    /// # Errors
    ///
    /// Returns the first storage error. When the flag write fails the
    /// previous user record is written back (or removed if there was none),
    /// so a failed call leaves storage as it found it.
    pub fn persist(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| StorageError::Write(e.to_string()))?;
        let previous = self.read(USER_KEY);
        self.storage.set(USER_KEY, &raw)?;
        if let Err(e) = self.storage.set(AUTH_FLAG_KEY, AUTH_FLAG_VALUE) {
            let rollback = match previous.as_deref() {
                Some(prev) => self.storage.set(USER_KEY, prev),
                None => self.storage.remove(USER_KEY),
            };
            if let Err(rb) = rollback {
                log::warn!("failed to roll back user record: {rb}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove both keys.
    ///
    /// # Errors
    ///
    /// Attempts both removals and returns the first failure, flag first.
    pub fn clear(&self) -> Result<(), StorageError> {
        let flag = self.storage.remove(AUTH_FLAG_KEY);
        let user = self.storage.remove(USER_KEY);
        flag.and(user)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("storage read of {key} failed: {e}");
                None
            }
        }
    }
}
