//! Event and event type records

use crate::output::{columns, Column, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An audit event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assuming_acting_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_sync_run_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipaddr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_device_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_cookie_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_reasons: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

const EVENT_COLUMNS: &[Column<Event>] = columns!(Event {
    "id" => |e| e.id,
    "account_id" => |e| e.account_id,
    "actor_system" => |e| e.actor_system.as_deref(),
    "actor_user_id" => |e| e.actor_user_id,
    "actor_user_name" => |e| e.actor_user_name.as_deref(),
    "app_id" => |e| e.app_id,
    "app_name" => |e| e.app_name.as_deref(),
    "assuming_acting_user_id" => |e| e.assuming_acting_user_id,
    "browser_fingerprint" => |e| e.browser_fingerprint.as_deref(),
    "client_id" => |e| e.client_id.as_deref(),
    "created_at" => |e| e.created_at,
    "custom_message" => |e| e.custom_message.as_deref(),
    "directory_id" => |e| e.directory_id,
    "directory_sync_run_id" => |e| e.directory_sync_run_id,
    "error_description" => |e| e.error_description.as_deref(),
    "event_type_id" => |e| e.event_type_id,
    "group_id" => |e| e.group_id,
    "group_name" => |e| e.group_name.as_deref(),
    "ipaddr" => |e| e.ipaddr.as_deref(),
    "notes" => |e| e.notes.as_deref(),
    "operation_name" => |e| e.operation_name.as_deref(),
    "otp_device_id" => |e| e.otp_device_id,
    "otp_device_name" => |e| e.otp_device_name.as_deref(),
    "policy_id" => |e| e.policy_id,
    "policy_name" => |e| e.policy_name.as_deref(),
    "proxy_ip" => |e| e.proxy_ip.as_deref(),
    "resolution" => |e| e.resolution,
    "resource_type_id" => |e| e.resource_type_id,
    "risk_cookie_id" => |e| e.risk_cookie_id.as_deref(),
    "risk_reasons" => |e| e.risk_reasons.as_deref(),
    "risk_score" => |e| e.risk_score,
    "role_id" => |e| e.role_id,
    "role_name" => |e| e.role_name.as_deref(),
    "user_id" => |e| e.user_id,
    "user_name" => |e| e.user_name.as_deref(),
});

impl Record for Event {
    fn columns() -> Option<&'static [Column<Self>]> {
        Some(EVENT_COLUMNS)
    }
}

/// A kind of event, e.g. "User Login"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EventType {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }
}

const EVENT_TYPE_COLUMNS: &[Column<EventType>] = columns!(EventType {
    "id" => |t| t.id,
    "name" => |t| t.name.as_str(),
    "description" => |t| t.description.as_deref(),
});

impl Record for EventType {
    fn columns() -> Option<&'static [Column<Self>]> {
        Some(EVENT_TYPE_COLUMNS)
    }
}

/// Filter parameters for the events endpoint.
///
/// Values are passed through as the provider expects them; comma-separated
/// lists are allowed where the provider accepts them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsQuery {
    pub client_id: Option<String>,
    pub created_at: Option<String>,
    pub directory_id: Option<String>,
    pub event_type_id: Option<String>,
    pub resolution: Option<String>,
    pub id: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub user_id: Option<String>,
}

impl EventsQuery {
    /// Query parameters for the set filters, in a stable order
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("client_id", &self.client_id),
            ("created_at", &self.created_at),
            ("directory_id", &self.directory_id),
            ("event_type_id", &self.event_type_id),
            ("resolution", &self.resolution),
            ("id", &self.id),
            ("since", &self.since),
            ("until", &self.until),
            ("user_id", &self.user_id),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}
