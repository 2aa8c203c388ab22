//! Tauri command handlers (IPC entry points).
//!
//! One file per concern, mirroring the runtime-facing surface:
//! - `listener`: the single long-lived event channel registration
//! - `settings`: option-token setters translated through the bitmask tables
//! - `remote`: remote-notification enable/disable and state queries

pub mod listener;
pub mod remote;
pub mod settings;
