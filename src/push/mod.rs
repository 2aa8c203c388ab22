//! Boundary with the native push SDK.
//!
//! This module provides:
//! - `PushSdk`: the trait the bridge programs against, covering the SDK's
//!   configuration surface and delegate installation
//! - `delegate`: SDK callbacks → broker adapter and the `PushEvent` set
//! - `options`: option-token → native bitmask tables
//! - `models`: JSON models for the SDK payloads
//! - `stub`: in-memory backend so non-native builds and tests work

pub mod delegate;
pub mod models;
pub mod options;
pub mod stub;

use std::sync::Arc;

use async_trait::async_trait;

use crate::push::delegate::PushDelegate;
use crate::Error;

/// The native SDK surface the bridge needs. Property setters and queries
/// complete synchronously on the SDK side; enabling remote notifications
/// runs a registration flow and completes asynchronously.
#[async_trait]
pub trait PushSdk: Send + Sync {
    /// Major OS version, used to gate option tokens by availability.
    fn platform_version(&self) -> u32;

    /// Install the callback sink. Must happen before the SDK can fire a
    /// launch notification.
    fn set_delegate(&self, delegate: PushDelegate);

    fn set_authorization_options(&self, mask: u32);

    fn set_category_options(&self, mask: u32);

    fn set_presentation_options(&self, mask: u32);

    fn has_remote_notifications_enabled(&self) -> bool;

    /// Whether the user-facing notification UI is currently permitted.
    fn allowed_ui(&self) -> bool;

    async fn enable_remote_notifications(&self) -> Result<(), Error>;

    fn disable_remote_notifications(&self);
}

/// The SDK backend for the current target. Mobile targets link the native
/// SDK through `init_with_sdk`; everything else gets the in-memory stub.
pub fn default_sdk() -> Arc<dyn PushSdk> {
    Arc::new(stub::StubSdk::new())
}
