use tauri::ipc::Channel;

use crate::bridge::BridgeEvent;
use crate::PushState;

/// Register the runtime-side event channel. The channel stays open for the
/// lifetime of the bridge and receives every event as a `{name, data?}`
/// object; anything the SDK fired before this call is flushed first, in
/// dispatch order.
#[tauri::command]
pub fn register_listener(state: tauri::State<'_, PushState>, channel: Channel<BridgeEvent>) {
    state.broker.start_listening(move |event| {
        if let Err(e) = channel.send(event) {
            tracing::warn!("failed to deliver push event to the runtime channel: {e}");
        }
    });
}
