//! Flash messages carried across the post-submit redirect.
//!
//! The message is stored in a short-lived cookie that the page script reads,
//! shows once, and clears.

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

/// Flash message structure stored in cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashMessage {
    /// Message type ("error" or "success")
    #[serde(rename = "type")]
    pub message_type: String,
    pub message: String,
    /// Whether the message should auto-dismiss after a few seconds
    pub auto_dismiss: bool,
}

impl FlashMessage {
    /// Create an error flash message that requires manual dismissal.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message_type: "error".to_string(),
            message: message.into(),
            auto_dismiss: false,
        }
    }

    /// Create a success flash message that auto-dismisses.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message_type: "success".to_string(),
            message: message.into(),
            auto_dismiss: true,
        }
    }

    pub fn to_cookie_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Build a Set-Cookie header value for the flash message.
    ///
    /// Readable by the page script (not HttpOnly) and expires after 60 seconds.
    pub fn to_set_cookie_header(&self) -> String {
        let encoded = urlencoding::encode(&self.to_cookie_value()).into_owned();
        format!("flash_message={encoded}; Path=/; SameSite=Lax; Max-Age=60")
    }
}

/// `303 See Other` to `url` carrying a flash message cookie.
pub fn redirect_with_flash(url: &str, flash: FlashMessage) -> Response {
    let cookie_header = flash.to_set_cookie_header();

    ([(SET_COOKIE, cookie_header)], Redirect::to(url)).into_response()
}
