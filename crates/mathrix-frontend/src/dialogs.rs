//! Blocking browser dialogs and page reloads.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            mathrix::log::warn!("alert failed: {err:?}");
        }
    }
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            mathrix::log::warn!("reload failed: {err:?}");
        }
    }
}
