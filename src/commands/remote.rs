use crate::{Error, PushState};

#[tauri::command]
pub fn has_remote_notifications_enabled(state: tauri::State<'_, PushState>) -> bool {
    state.sdk.has_remote_notifications_enabled()
}

#[tauri::command]
pub fn allowed_ui(state: tauri::State<'_, PushState>) -> bool {
    state.sdk.allowed_ui()
}

/// Start the remote-notification registration flow. A failure surfaces to
/// the runtime as an error string; it is also reported asynchronously via
/// the `failed_to_register_for_remote_notifications` event.
#[tauri::command]
pub async fn enable_remote_notifications(state: tauri::State<'_, PushState>) -> Result<(), Error> {
    state.sdk.enable_remote_notifications().await
}

#[tauri::command]
pub fn disable_remote_notifications(state: tauri::State<'_, PushState>) {
    state.sdk.disable_remote_notifications();
}
