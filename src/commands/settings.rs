use crate::push::options::{authorization_options, category_options, presentation_options};
use crate::PushState;

/// Set the authorization options requested when asking for notification
/// permission. Unknown tokens and tokens the current OS version does not
/// support are silently ignored.
#[tauri::command]
pub fn set_authorization_options(state: tauri::State<'_, PushState>, options: Vec<String>) {
    let mask = authorization_options(&options, state.sdk.platform_version());
    state.sdk.set_authorization_options(mask);
}

/// Set the options applied to notification categories registered by the SDK.
#[tauri::command]
pub fn set_category_options(state: tauri::State<'_, PushState>, options: Vec<String>) {
    let mask = category_options(&options, state.sdk.platform_version());
    state.sdk.set_category_options(mask);
}

/// Set how notifications are presented while the app is in the foreground.
#[tauri::command]
pub fn set_presentation_options(state: tauri::State<'_, PushState>, options: Vec<String>) {
    let mask = presentation_options(&options, state.sdk.platform_version());
    state.sdk.set_presentation_options(mask);
}
