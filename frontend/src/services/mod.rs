//! Page services.
//!
//! # Services
//!
//! - [`toast`] - Transient notifications, the form's [`donation::Notifier`]

pub mod toast;

pub use toast::*;
