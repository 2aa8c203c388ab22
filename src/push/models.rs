//! JSON models for the payloads the native SDK hands to its delegate.
//!
//! Field names follow the SDK's camelCase wire convention; optional fields
//! are omitted rather than serialized as null.

use serde::{Deserialize, Serialize};

/// A notification the SDK resolved into its full remote representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// True when the SDK could not fetch the full remote notification and
    /// only the push payload fields are populated.
    #[serde(default)]
    pub partial: bool,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<NotificationContent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NotificationAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<NotificationAttachment>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A content block inside a notification (html, video, map, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub data: serde_json::Value,
}

/// An action button attached to a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub keyboard: bool,
    #[serde(default)]
    pub camera: bool,
}

/// A media attachment on a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAttachment {
    pub media_type: String,
    pub uri: String,
}

/// A silent system notification carrying only SDK housekeeping data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemNotification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
