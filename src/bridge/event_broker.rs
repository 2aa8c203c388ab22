use std::sync::Mutex;

use serde::Serialize;

/// A single event crossing the bridge, serialized on the wire as
/// `{ "name": ..., "data": ... }` with `data` omitted when there is no
/// payload.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeEvent {
    pub name: &'static str,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl BridgeEvent {
    pub fn new(name: &'static str, payload: Option<serde_json::Value>) -> Self {
        Self { name, payload }
    }
}

type EventHandler = Box<dyn Fn(BridgeEvent) + Send + Sync + 'static>;

#[derive(Default)]
struct Slot {
    handler: Option<EventHandler>,
    pending: Vec<BridgeEvent>,
}

/// Relay between the native SDK callbacks (producer, any thread) and the
/// single runtime-facing listener (consumer).
///
/// The SDK can start firing before the runtime side has registered — a
/// launch notification arrives during that window — so events dispatched
/// with no listener attached are queued and flushed, in order, when the
/// first listener arrives. Once a listener is attached the buffer is never
/// used again; a later `start_listening` swaps the handler without replay.
pub struct EventBroker {
    slot: Mutex<Slot>,
}

impl EventBroker {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Deliver `event` to the current listener, or queue it if none is
    /// attached yet. Delivery happens under the lock, so dispatch order is
    /// total across threads.
    pub fn dispatch(&self, event: BridgeEvent) {
        let mut guard = self.slot.lock().expect("event broker mutex poisoned");
        let slot = &mut *guard;
        match slot.handler.as_ref() {
            Some(handler) => handler(event),
            None => slot.pending.push(event),
        }
    }

    /// Register `handler` as the sole recipient of all events. Anything
    /// queued before the first listener attached is flushed to `handler`,
    /// in original dispatch order, before this returns. Calling again
    /// replaces the handler; the buffer is only ever non-empty before the
    /// first attach, so there is no replay.
    pub fn start_listening<F>(&self, handler: F)
    where
        F: Fn(BridgeEvent) + Send + Sync + 'static,
    {
        let mut guard = self.slot.lock().expect("event broker mutex poisoned");
        let slot = &mut *guard;
        for event in slot.pending.drain(..) {
            handler(event);
        }
        slot.handler = Some(Box::new(handler));
    }

    /// Number of events waiting for the first listener.
    pub fn pending_len(&self) -> usize {
        self.slot
            .lock()
            .expect("event broker mutex poisoned")
            .pending
            .len()
    }
}

impl Default for EventBroker {
    fn default() -> Self {
        Self::new()
    }
}
