//! App records and queries

use super::user::User;
use crate::output::{columns, Column, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application configured in the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_assumed_signin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

const APP_COLUMNS: &[Column<App>] = columns!(App {
    "id" => |a| a.id,
    "connector_id" => |a| a.connector_id,
    "name" => |a| a.name.as_deref(),
    "description" => |a| a.description.as_deref(),
    "notes" => |a| a.notes.as_deref(),
    "visible" => |a| a.visible,
    "auth_method" => |a| a.auth_method,
    "policy_id" => |a| a.policy_id,
    "brand_id" => |a| a.brand_id,
    "icon_url" => |a| a.icon_url.as_deref(),
    "allow_assumed_signin" => |a| a.allow_assumed_signin,
    "tab_id" => |a| a.tab_id,
    "created_at" => |a| a.created_at,
    "updated_at" => |a| a.updated_at,
});

impl Record for App {
    fn columns() -> Option<&'static [Column<Self>]> {
        Some(APP_COLUMNS)
    }
}

/// An app together with the users assigned to it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDetails {
    #[serde(flatten)]
    pub app: App,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Record for AppDetails {
    // Nested user list, no tabular form.
    fn columns() -> Option<&'static [Column<Self>]> {
        None
    }
}

/// Search filter for apps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppQuery {
    pub name: Option<String>,
}
