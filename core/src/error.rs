//! Error types for donation form submission.
//!
//! Both variants are local and user-correctable: the form state is left
//! untouched and the donor can edit the fields and submit again.
//!
//! - [`SubmitError::InvalidAmount`] - no preset selected and no usable custom amount
//! - [`SubmitError::MissingFields`] - one or more required donor/payment fields empty

use thiserror::Error;

use crate::models::DonorField;
use crate::notify::Notification;

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors raised when the form is submitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The final amount is zero, negative, or the custom text is not a number.
    #[error("Invalid amount: please select or enter a donation amount")]
    InvalidAmount,

    /// Required fields left empty, in form order.
    #[error("Missing information: {}", field_list(.0))]
    MissingFields(Vec<DonorField>),
}

impl SubmitError {
    /// Error notification shown to the donor for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            SubmitError::InvalidAmount => Notification::error(
                "Invalid amount",
                "Please select or enter a donation amount",
            ),
            SubmitError::MissingFields(_) => Notification::error(
                "Missing information",
                "Please fill in all required fields",
            ),
        }
    }
}

fn field_list(fields: &[DonorField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for form validation and submission.
pub type DonationResult<T> = Result<T, SubmitError>;
