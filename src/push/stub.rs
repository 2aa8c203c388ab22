//! In-memory SDK backend for desktop builds and CI.
//!
//! The real backends wrap the platform push SDK; this one records the
//! configuration it is given and simulates the SDK's observable behavior so
//! the bridge can be developed and tested off-device.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::push::delegate::{PushDelegate, PushEvent};
use crate::push::PushSdk;
use crate::Error;

/// Major version the stub reports; recent enough that no option token is
/// gated off.
const STUB_PLATFORM_VERSION: u32 = 17;

#[derive(Default)]
struct StubState {
    authorization_options: u32,
    category_options: u32,
    presentation_options: u32,
    enabled: bool,
    delegate: Option<PushDelegate>,
}

pub struct StubSdk {
    state: Mutex<StubState>,
    platform_version: u32,
}

impl StubSdk {
    pub fn new() -> Self {
        Self::with_platform_version(STUB_PLATFORM_VERSION)
    }

    /// A stub that reports `major` as its OS version, for exercising the
    /// version-gated option tokens.
    pub fn with_platform_version(major: u32) -> Self {
        Self {
            state: Mutex::new(StubState::default()),
            platform_version: major,
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, StubState> {
        self.state.lock().expect("stub sdk mutex poisoned")
    }

    fn delegate(&self) -> Option<PushDelegate> {
        self.state().delegate.clone()
    }

    /// Drive the installed delegate exactly like a native SDK callback.
    pub fn simulate(&self, event: PushEvent) {
        match self.delegate() {
            Some(delegate) => delegate.emit(event),
            None => tracing::warn!("simulated SDK callback dropped: no delegate installed"),
        }
    }

    pub fn authorization_options(&self) -> u32 {
        self.state().authorization_options
    }

    pub fn category_options(&self) -> u32 {
        self.state().category_options
    }

    pub fn presentation_options(&self) -> u32 {
        self.state().presentation_options
    }
}

impl Default for StubSdk {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushSdk for StubSdk {
    fn platform_version(&self) -> u32 {
        self.platform_version
    }

    fn set_delegate(&self, delegate: PushDelegate) {
        self.state().delegate = Some(delegate);
    }

    fn set_authorization_options(&self, mask: u32) {
        self.state().authorization_options = mask;
    }

    fn set_category_options(&self, mask: u32) {
        self.state().category_options = mask;
    }

    fn set_presentation_options(&self, mask: u32) {
        self.state().presentation_options = mask;
    }

    fn has_remote_notifications_enabled(&self) -> bool {
        self.state().enabled
    }

    fn allowed_ui(&self) -> bool {
        self.state().enabled
    }

    async fn enable_remote_notifications(&self) -> Result<(), Error> {
        self.state().enabled = true;
        // The native SDK reports the permission change through its delegate
        // once registration completes.
        self.simulate(PushEvent::NotificationSettingsChanged(true));
        Ok(())
    }

    fn disable_remote_notifications(&self) {
        self.state().enabled = false;
        self.simulate(PushEvent::NotificationSettingsChanged(false));
    }
}
