//! User account and session models for the local sign-in flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role granted to a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Manager,
    Technician,
    Viewer,
}

impl UserRole {
    /// Convert to the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Manager => "Manager",
            UserRole::Technician => "Technician",
            UserRole::Viewer => "Viewer",
        }
    }

    /// Parse from the wire/storage string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Manager" => Some(UserRole::Manager),
            "Technician" => Some(UserRole::Technician),
            "Viewer" => Some(UserRole::Viewer),
            _ => None,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Technician
    }
}

/// A registered account as persisted in the `gearguard_users` blob.
///
/// The password is stored as given; there is no hashing or token scheme in
/// this local single-user tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(default)]
    pub team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The signed-in user as exposed to views; never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&UserAccount> for CurrentUser {
    fn from(account: &UserAccount) -> Self {
        CurrentUser {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
            team: account.team.clone(),
            avatar: account.avatar.clone(),
            created_at: account.created_at,
        }
    }
}

/// Payload for registering a new account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub team: String,
}

/// Patch payload for profile edits; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub team: Option<String>,
}
