//! Event relay between the native SDK and the runtime-facing channel.
//!
//! Events flow from SDK delegate callbacks → `EventBroker` → the channel
//! registered by the runtime:
//! - `EventBroker`: single-listener relay that buffers events fired before
//!   the runtime has attached (e.g. a launch notification)
//! - `BridgeEvent`: the `{name, data?}` envelope sent over the channel

mod event_broker;

pub use event_broker::{BridgeEvent, EventBroker};

#[cfg(test)]
mod tests;
