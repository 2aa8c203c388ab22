//! Common test utilities for the push bridge integration tests.

use std::sync::{Arc, Mutex, Once};

use pushbridge_lib::bridge::{BridgeEvent, EventBroker};
use pushbridge_lib::push::models::Notification;

static TRACING: Once = Once::new();

/// Initialize test logging once per binary. `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "pushbridge=debug".parse().expect("valid env filter")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A listener that records everything the broker delivers.
pub struct RecordingListener {
    events: Arc<Mutex<Vec<BridgeEvent>>>,
}

impl RecordingListener {
    /// Attach a fresh recording listener to `broker` via `start_listening`.
    pub fn attach(broker: &EventBroker) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        broker.start_listening(move |event| {
            sink.lock().expect("recording mutex poisoned").push(event);
        });
        Self { events }
    }

    pub fn events(&self) -> Vec<BridgeEvent> {
        self.events.lock().expect("recording mutex poisoned").clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.name).collect()
    }
}

pub fn sample_notification(id: &str) -> Notification {
    Notification {
        id: id.to_string(),
        partial: false,
        notification_type: "re.notifica.notification.Alert".to_string(),
        time: "2024-01-01T00:00:00Z".to_string(),
        title: Some("Integration".to_string()),
        subtitle: None,
        message: format!("message for {id}"),
        content: Vec::new(),
        actions: Vec::new(),
        attachments: Vec::new(),
        extra: serde_json::Map::new(),
    }
}
