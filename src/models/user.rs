//! User records and queries

use crate::output::{columns, Column, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinguished_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samaccountname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userprincipalname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_ad_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_idp_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_login_attempts: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_changed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_sent_at: Option<DateTime<Utc>>,
}

const USER_COLUMNS: &[Column<User>] = columns!(User {
    "id" => |u| u.id,
    "username" => |u| u.username.as_deref(),
    "email" => |u| u.email.as_deref(),
    "firstname" => |u| u.firstname.as_deref(),
    "lastname" => |u| u.lastname.as_deref(),
    "title" => |u| u.title.as_deref(),
    "department" => |u| u.department.as_deref(),
    "company" => |u| u.company.as_deref(),
    "comment" => |u| u.comment.as_deref(),
    "phone" => |u| u.phone.as_deref(),
    "distinguished_name" => |u| u.distinguished_name.as_deref(),
    "samaccountname" => |u| u.samaccountname.as_deref(),
    "userprincipalname" => |u| u.userprincipalname.as_deref(),
    "manager_ad_id" => |u| u.manager_ad_id,
    "manager_user_id" => |u| u.manager_user_id,
    "external_id" => |u| u.external_id.as_deref(),
    "group_id" => |u| u.group_id,
    "directory_id" => |u| u.directory_id,
    "trusted_idp_id" => |u| u.trusted_idp_id,
    "state" => |u| u.state,
    "status" => |u| u.status,
    "invalid_login_attempts" => |u| u.invalid_login_attempts,
    "created_at" => |u| u.created_at,
    "updated_at" => |u| u.updated_at,
    "activated_at" => |u| u.activated_at,
    "last_login" => |u| u.last_login,
    "password_changed_at" => |u| u.password_changed_at,
    "locked_until" => |u| u.locked_until,
    "invitation_sent_at" => |u| u.invitation_sent_at,
});

impl Record for User {
    fn columns() -> Option<&'static [Column<Self>]> {
        Some(USER_COLUMNS)
    }
}

/// Search filter for users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub email: Option<String>,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// User id, or comma-separated list of ids
    pub id: Option<String>,
}

impl UserQuery {
    /// True when no filter field is set
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.id.is_none()
    }
}

/// Partial user for write-back; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl UserUpdate {
    /// Update that changes only the email address
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

/// Fields accepted when creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl NewUser {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
        }
    }
}
