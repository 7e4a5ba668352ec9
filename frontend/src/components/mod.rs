//! UI Components for the donation page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Title and mission statement
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DonationFormCard`] - Donation type, amount, donor and payment form
//! - [`ImpactSection`] - What typical amounts pay for
//! - [`Toaster`] - Transient notifications
//!
//! # Widgets
//! - [`TextField`], [`ToggleButton`], [`Card`]

mod header;
mod hero;
mod donation_form;
mod impact;
mod toaster;
mod widgets;
mod footer;

pub use header::*;
pub use hero::*;
pub use donation_form::*;
pub use impact::*;
pub use toaster::*;
pub use widgets::*;
pub use footer::*;
