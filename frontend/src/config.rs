//! Application configuration.
//!
//! Compile-time settings for the donation page. Preset amounts live with
//! the form logic in [`donation::PresetAmount`].

/// Organization name shown in the header, footer and page title.
pub const APP_NAME: &str = "Helping Hands";

/// Currency symbol prefixed to amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts displayed at once; the oldest is dropped first.
pub const MAX_TOASTS: usize = 3;
