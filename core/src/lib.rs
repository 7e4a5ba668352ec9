//! # Donation - form state and validation
//!
//! Framework-independent logic behind the donation page. The web frontend
//! keeps one [`DonationForm`] and forwards user events to it; everything here
//! is synchronous and runs without a browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  UI events  │────▶│ DonationForm │────▶│  validate() │────▶│  Notifier   │
//! │ click/input │     │ (transitions)│     │ amount+fields│    │ (toast etc.)│
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`models`] - Donation type, preset amounts, donor fields
//! - [`amount`] - Validated amounts and custom text parsing
//! - [`form`] - The form state machine
//! - [`notify`] - Notification values and the [`Notifier`] seam
//! - [`error`] - Submission errors

// Core modules
pub mod error;
pub mod models;

// Amounts
pub mod amount;

// Form state
pub mod form;

// Notifications
pub mod notify;

// =============================================================================
// Re-exports
// =============================================================================

pub use amount::{parse_amount, Amount};
pub use error::{DonationResult, SubmitError};
pub use form::{DonationForm, DonationReceipt};
pub use models::{DonationType, DonorDetails, DonorField, PresetAmount};
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier};
