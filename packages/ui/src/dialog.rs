//! Blocking browser dialogs (`alert` / `confirm`) run through the document.
//!
//! Works on every renderer that hosts a webview, so shared views can ask for
//! confirmation without platform-specific code.

use dioxus::prelude::*;

fn js_string(msg: &str) -> String {
    serde_json::to_string(msg).unwrap_or_else(|_| "\"\"".to_string())
}

/// Show a message and continue without waiting for it to be dismissed.
pub fn alert(msg: &str) {
    let _ = document::eval(&format!("alert({});", js_string(msg)));
}

/// Ask the user to confirm. Any evaluation failure counts as "no".
pub async fn confirm(msg: &str) -> bool {
    let mut eval = document::eval(&format!("dioxus.send(confirm({}));", js_string(msg)));
    matches!(eval.recv::<bool>().await, Ok(true))
}

/// Scroll the page back to the top (used when a form is filled from below).
pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo(0, 0);");
}
