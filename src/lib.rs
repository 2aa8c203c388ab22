//! Push-notification bridge plugin backend.
//!
//! Bridges a native push-notification SDK to the webview runtime. It handles:
//! - Plugin initialization and delegate installation on the SDK
//! - Tauri command registration and IPC handling
//! - Event relay from SDK callbacks to the runtime channel
//! - Option-token translation into native bitmasks
//!
//! # Architecture
//!
//! The backend follows a modular architecture:
//! - `commands`: Tauri command handlers (IPC entry points)
//! - `bridge`: event broker decoupling SDK callbacks from the runtime channel
//! - `push`: the native SDK boundary (trait, delegate adapter, option tables,
//!   payload models, desktop stub)

pub mod bridge;
mod commands;
pub mod push;

use std::sync::Arc;

use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};

use bridge::EventBroker;
use push::delegate::PushDelegate;
use push::PushSdk;

// ---------------------------------------------------------------------------
// Shared error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Sdk(String),
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}

impl serde::Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

pub(crate) struct PushState {
    pub broker: Arc<EventBroker>,
    pub sdk: Arc<dyn PushSdk>,
}

// ---------------------------------------------------------------------------
// Plugin entry points
// ---------------------------------------------------------------------------

/// Initialize the plugin with the SDK backend for the current target.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with_sdk(push::default_sdk())
}

/// Initialize the plugin against a specific SDK backend. Native glue code
/// injects the platform SDK here; tests inject the stub.
pub fn init_with_sdk<R: Runtime>(sdk: Arc<dyn PushSdk>) -> TauriPlugin<R> {
    Builder::new("pushbridge")
        .invoke_handler(tauri::generate_handler![
            // listener
            commands::listener::register_listener,
            // settings
            commands::settings::set_authorization_options,
            commands::settings::set_category_options,
            commands::settings::set_presentation_options,
            // remote notifications
            commands::remote::has_remote_notifications_enabled,
            commands::remote::allowed_ui,
            commands::remote::enable_remote_notifications,
            commands::remote::disable_remote_notifications,
        ])
        .setup(move |app, _api| {
            let broker = Arc::new(EventBroker::new());

            // The delegate must be in place before the SDK can fire a launch
            // notification; anything it emits before the runtime registers
            // its listener is held by the broker.
            sdk.set_delegate(PushDelegate::new(broker.clone()));

            app.manage(PushState { broker, sdk });

            tracing::info!("push bridge initialized");
            Ok(())
        })
        .build()
}
