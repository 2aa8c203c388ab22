//! Adapter between the native SDK delegate callbacks and the event broker.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::bridge::{BridgeEvent, EventBroker};
use crate::push::models::{Notification, NotificationAction, SystemNotification};

/// Everything the native SDK reports through its delegate, one variant per
/// callback. `name()` is the identifier the runtime listens for and
/// `payload()` is the JSON the envelope carries.
#[derive(Debug, Clone)]
pub enum PushEvent {
    /// A known notification arrived while the app was running.
    NotificationReceived(Notification),

    /// A silent system notification arrived.
    SystemNotificationReceived(SystemNotification),

    /// A push arrived that the SDK does not recognize; the raw userInfo map
    /// is forwarded as-is.
    UnknownNotificationReceived(serde_json::Map<String, Value>),

    /// The user opened a known notification.
    NotificationOpened(Notification),

    /// The user opened a push the SDK does not recognize.
    UnknownNotificationOpened(serde_json::Map<String, Value>),

    /// The user triggered an action on a known notification.
    NotificationActionOpened {
        notification: Notification,
        action: NotificationAction,
    },

    /// The user triggered an action on an unrecognized push.
    UnknownNotificationActionOpened {
        notification: serde_json::Map<String, Value>,
        action: String,
        response_text: Option<String>,
    },

    /// The OS-level notification permission changed.
    NotificationSettingsChanged(bool),

    /// The SDK asks the app to open its notification settings screen,
    /// optionally scoped to one notification.
    ShouldOpenNotificationSettings(Option<Notification>),

    /// APNS registration failed; the error is forwarded as a string.
    FailedToRegisterForRemoteNotifications(String),
}

impl PushEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PushEvent::NotificationReceived(_) => "notification_received",
            PushEvent::SystemNotificationReceived(_) => "system_notification_received",
            PushEvent::UnknownNotificationReceived(_) => "unknown_notification_received",
            PushEvent::NotificationOpened(_) => "notification_opened",
            PushEvent::UnknownNotificationOpened(_) => "unknown_notification_opened",
            PushEvent::NotificationActionOpened { .. } => "notification_action_opened",
            PushEvent::UnknownNotificationActionOpened { .. } => {
                "unknown_notification_action_opened"
            }
            PushEvent::NotificationSettingsChanged(_) => "notification_settings_changed",
            PushEvent::ShouldOpenNotificationSettings(_) => "should_open_notification_settings",
            PushEvent::FailedToRegisterForRemoteNotifications(_) => {
                "failed_to_register_for_remote_notifications"
            }
        }
    }

    /// Build the JSON payload for the wire envelope. `None` means the event
    /// carries no data at all, not a null payload.
    pub fn payload(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            PushEvent::NotificationReceived(notification)
            | PushEvent::NotificationOpened(notification) => {
                serde_json::to_value(notification).map(Some)
            }
            PushEvent::SystemNotificationReceived(notification) => {
                serde_json::to_value(notification).map(Some)
            }
            PushEvent::UnknownNotificationReceived(user_info)
            | PushEvent::UnknownNotificationOpened(user_info) => {
                Ok(Some(Value::Object(user_info.clone())))
            }
            PushEvent::NotificationActionOpened {
                notification,
                action,
            } => Ok(Some(json!({
                "notification": serde_json::to_value(notification)?,
                "action": serde_json::to_value(action)?,
            }))),
            PushEvent::UnknownNotificationActionOpened {
                notification,
                action,
                response_text,
            } => {
                let mut data = serde_json::Map::new();
                data.insert("notification".into(), Value::Object(notification.clone()));
                data.insert("action".into(), Value::String(action.clone()));
                if let Some(response_text) = response_text {
                    data.insert("responseText".into(), Value::String(response_text.clone()));
                }
                Ok(Some(Value::Object(data)))
            }
            PushEvent::NotificationSettingsChanged(granted) => Ok(Some(Value::Bool(*granted))),
            PushEvent::ShouldOpenNotificationSettings(notification) => notification
                .as_ref()
                .map(serde_json::to_value)
                .transpose(),
            PushEvent::FailedToRegisterForRemoteNotifications(error) => {
                Ok(Some(Value::String(error.clone())))
            }
        }
    }
}

/// The delegate the bridge installs on the SDK at plugin setup. Serializes
/// each callback into a `BridgeEvent` and hands it to the broker.
#[derive(Clone)]
pub struct PushDelegate {
    broker: Arc<EventBroker>,
}

impl PushDelegate {
    pub fn new(broker: Arc<EventBroker>) -> Self {
        Self { broker }
    }

    /// Forward one SDK callback to the runtime. If the payload cannot be
    /// serialized the event is skipped entirely — the runtime never sees a
    /// null payload and the broker never sees the error.
    pub fn emit(&self, event: PushEvent) {
        match event.payload() {
            Ok(payload) => self.broker.dispatch(BridgeEvent::new(event.name(), payload)),
            Err(e) => tracing::error!("failed to emit the {} event: {e}", event.name()),
        }
    }
}
