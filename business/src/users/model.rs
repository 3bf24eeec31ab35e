//! The user record exchanged with the server.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a user. The wire format carries the variant name
/// verbatim (`"Active"`, `"Inactive"`, `"Terminated"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Terminated,
}

impl UserStatus {
    /// Every status, in the order the form's dropdown offers them.
    pub const ALL: [UserStatus; 3] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Terminated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Terminated => "Terminated",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record, the sole domain object.
///
/// `user_id` is absent for a record that has not been created server-side
/// yet; its presence distinguishes "create" intent from "update" intent.
/// `user_status` is optional so a fresh working copy genuinely has no status
/// until the form selects one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
    pub department: String,
}

impl UserRecord {
    /// True when the record has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.user_id.is_none()
    }
}
