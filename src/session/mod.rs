//! Local sign-in flow.
//!
//! Implements constant-time password comparison to mitigate timing attacks.
//!
//! Accounts live in the `gearguard_users` blob and the signed-in user in
//! `gearguard_user`, both persisted through the same injected adapter the
//! domain store uses. There are no tokens and no expiry: whoever the session
//! blob names stays signed in until logout.

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CurrentUser, ProfileUpdate, SignupData, UserAccount};
use crate::storage::{self, StorageAdapter, SESSION_KEY, USERS_KEY};

/// Authentication and profile state for the single local user.
pub struct Session {
    users: Vec<UserAccount>,
    current: Option<CurrentUser>,
    adapter: Arc<dyn StorageAdapter>,
}

impl Session {
    /// Load the account list and any remembered sign-in.
    ///
    /// Unreadable blobs are discarded with a warning; an adapter read
    /// failure aborts construction.
    pub fn open(adapter: Arc<dyn StorageAdapter>) -> Result<Self, AppError> {
        let users = load_or_default(adapter.as_ref(), USERS_KEY)?;
        let current = load_or_default(adapter.as_ref(), SESSION_KEY)?;
        Ok(Session {
            users,
            current,
            adapter,
        })
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current.as_ref()
    }

    /// Check credentials against the stored accounts. On success the user is
    /// remembered (and persisted) until logout.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let matched = self
            .users
            .iter()
            .find(|u| u.email == email && constant_time_compare(&u.password, password))
            .map(CurrentUser::from);
        match matched {
            Some(user) => {
                self.current = Some(user);
                self.persist_current();
                true
            }
            None => false,
        }
    }

    /// Register a new account and sign in as it. Returns false when the
    /// email is already taken.
    pub fn signup(&mut self, data: SignupData) -> bool {
        if self.users.iter().any(|u| u.email == data.email) {
            return false;
        }
        let account = UserAccount {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            email: data.email,
            password: data.password,
            role: data.role,
            team: data.team,
            avatar: None,
            created_at: Utc::now(),
        };
        self.current = Some(CurrentUser::from(&account));
        self.users.push(account);
        self.persist_users();
        self.persist_current();
        true
    }

    /// Forget the signed-in user and drop the session blob.
    pub fn logout(&mut self) {
        self.current = None;
        if let Err(e) = self.adapter.delete(SESSION_KEY) {
            tracing::warn!("failed to clear {}: {}", SESSION_KEY, e);
        }
    }

    /// Merge profile fields into the signed-in user and its stored account.
    /// Returns false when nobody is signed in.
    pub fn update_profile(&mut self, patch: ProfileUpdate) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        if let Some(v) = patch.name {
            current.name = v;
        }
        if let Some(v) = patch.email {
            current.email = v;
        }
        if let Some(v) = patch.role {
            current.role = v;
        }
        if let Some(v) = patch.team {
            current.team = v;
        }
        let snapshot = current.clone();

        if let Some(account) = self.users.iter_mut().find(|u| u.id == snapshot.id) {
            account.name = snapshot.name.clone();
            account.email = snapshot.email.clone();
            account.role = snapshot.role;
            account.team = snapshot.team;
            self.persist_users();
        }
        self.persist_current();
        true
    }

    fn persist_users(&self) {
        storage::write_json(self.adapter.as_ref(), USERS_KEY, &self.users);
    }

    fn persist_current(&self) {
        storage::write_json(self.adapter.as_ref(), SESSION_KEY, &self.current);
    }
}

fn load_or_default<T>(adapter: &dyn StorageAdapter, key: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    Ok(storage::read_json(adapter, key)?.unwrap_or_default())
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("hunter2-secret", "hunter2-secret"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("hunter2-secret", "hunter2-secres"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-password"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }
}
