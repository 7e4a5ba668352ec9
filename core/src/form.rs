//! Donation form state and transitions.
//!
//! Every user interaction maps to one synchronous method on
//! [`DonationForm`]. The rendering layer owns a single form value, calls
//! these methods from its event handlers and re-renders from the getters.
//!
//! # Amount selection
//!
//! At most one of the preset selection and the custom amount text is active:
//!
//! ```text
//! select_preset_amount(p)  ──▶  selected = Some(p), custom = ""
//! edit_custom_amount(t)    ──▶  selected = None,    custom = t
//! ```
//!
//! # Example
//!
//! ```rust
//! use donation::{DonationForm, DonationType, DonorField, PresetAmount, RecordingNotifier};
//!
//! let mut form = DonationForm::new();
//! form.select_donation_type(DonationType::Monthly);
//! form.select_preset_amount(PresetAmount::TwentyFive);
//! form.edit_field(DonorField::Name, "Jane Doe");
//! form.edit_field(DonorField::Email, "jane@x.com");
//! form.edit_field(DonorField::CardNumber, "4111111111111111");
//!
//! let notifier = RecordingNotifier::new();
//! let receipt = form.submit(&notifier).unwrap();
//! assert_eq!(receipt.amount.to_string(), "25");
//! assert_eq!(form.field(DonorField::Name), "");
//! ```

use serde::{Deserialize, Serialize};

use crate::amount::{parse_amount, Amount};
use crate::error::{DonationResult, SubmitError};
use crate::models::{DonationType, DonorDetails, DonorField, PresetAmount};
use crate::notify::{Notification, Notifier};

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationReceipt {
    pub donation_type: DonationType,
    pub amount: Amount,
}

impl DonationReceipt {
    /// Success notification for this donation.
    pub fn notification(&self) -> Notification {
        Notification::success(
            "Thank you for your generosity!",
            format!(
                "Your {} donation of ${} has been processed successfully.",
                self.donation_type, self.amount
            ),
        )
    }
}

/// Transient state of one donation form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationForm {
    donation_type: DonationType,
    selected_preset: Option<PresetAmount>,
    custom_amount: String,
    details: DonorDetails,
}

impl DonationForm {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    pub fn select_donation_type(&mut self, donation_type: DonationType) {
        log::debug!("Donation type: {}", donation_type);
        self.donation_type = donation_type;
    }

    /// Select a preset and clear any custom amount.
    pub fn select_preset_amount(&mut self, preset: PresetAmount) {
        log::debug!("Preset amount: {}", preset);
        self.selected_preset = Some(preset);
        self.custom_amount.clear();
    }

    /// Store the custom amount text verbatim and deselect all presets.
    pub fn edit_custom_amount(&mut self, text: impl Into<String>) {
        self.custom_amount = text.into();
        self.selected_preset = None;
    }

    /// Store a donor or payment field verbatim. No live validation.
    pub fn edit_field(&mut self, field: DonorField, text: impl Into<String>) {
        self.details.set(field, text);
    }

    /// Clear amounts and donor/payment fields. The donation type is kept.
    pub fn reset(&mut self) {
        self.selected_preset = None;
        self.custom_amount.clear();
        self.details = DonorDetails::default();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn donation_type(&self) -> DonationType {
        self.donation_type
    }

    pub fn selected_preset(&self) -> Option<PresetAmount> {
        self.selected_preset
    }

    /// Selected preset value, `0` when no preset is selected.
    pub fn selected_amount(&self) -> u32 {
        self.selected_preset.map(|p| p.value()).unwrap_or(0)
    }

    pub fn custom_amount(&self) -> &str {
        &self.custom_amount
    }

    /// Whether the preset button should render as active.
    pub fn is_preset_active(&self, preset: PresetAmount) -> bool {
        self.selected_preset == Some(preset) && self.custom_amount.is_empty()
    }

    pub fn field(&self, field: DonorField) -> &str {
        self.details.get(field)
    }

    pub fn details(&self) -> &DonorDetails {
        &self.details
    }

    // -------------------------------------------------------------------------
    // Validation & submission
    // -------------------------------------------------------------------------

    /// Amount that would be donated now.
    ///
    /// Non-empty custom text takes precedence over the preset selection.
    pub fn final_amount(&self) -> DonationResult<Amount> {
        let amount = if self.custom_amount.is_empty() {
            self.selected_preset.map(Amount::from)
        } else {
            parse_amount(&self.custom_amount)
        };
        amount.ok_or(SubmitError::InvalidAmount)
    }

    /// Check the amount, then the required fields.
    pub fn validate(&self) -> DonationResult<Amount> {
        let amount = self.final_amount()?;

        let missing = self.details.missing_required();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        Ok(amount)
    }

    /// Validate, notify the outcome, and reset on success.
    ///
    /// On error the state is left unchanged so the donor can correct it.
    pub fn submit<N: Notifier>(&mut self, notifier: &N) -> DonationResult<DonationReceipt> {
        match self.validate() {
            Ok(amount) => {
                let receipt = DonationReceipt {
                    donation_type: self.donation_type,
                    amount,
                };
                log::info!("Donation accepted: {} ${}", receipt.donation_type, receipt.amount);
                notifier.notify(receipt.notification());
                self.reset();
                Ok(receipt)
            }
            Err(e) => {
                log::warn!("Donation rejected: {}", e);
                notifier.notify(e.notification());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationKind, RecordingNotifier};

    fn filled_form() -> DonationForm {
        let mut form = DonationForm::new();
        form.edit_field(DonorField::Name, "Jane Doe");
        form.edit_field(DonorField::Email, "jane@x.com");
        form.edit_field(DonorField::CardNumber, "4111111111111111");
        form.edit_field(DonorField::CardExpiry, "12/27");
        form.edit_field(DonorField::CardCvv, "123");
        form
    }

    #[test]
    fn test_initial_state() {
        let form = DonationForm::new();
        assert_eq!(form.donation_type(), DonationType::OneTime);
        assert_eq!(form.selected_amount(), 0);
        assert_eq!(form.custom_amount(), "");
        for field in DonorField::ALL {
            assert_eq!(form.field(field), "");
        }
    }

    #[test]
    fn test_preset_clears_custom_and_custom_clears_preset() {
        let mut form = DonationForm::new();
        form.edit_custom_amount("42");
        form.select_preset_amount(PresetAmount::Fifty);
        assert_eq!(form.custom_amount(), "");
        assert_eq!(form.selected_amount(), 50);
        assert!(form.is_preset_active(PresetAmount::Fifty));

        form.edit_custom_amount("7");
        assert_eq!(form.selected_preset(), None);
        assert_eq!(form.selected_amount(), 0);
        assert_eq!(form.custom_amount(), "7");
        assert!(!form.is_preset_active(PresetAmount::Fifty));
    }

    #[test]
    fn test_select_preset_is_idempotent() {
        let mut once = filled_form();
        once.select_preset_amount(PresetAmount::Fifty);

        let mut twice = filled_form();
        twice.select_preset_amount(PresetAmount::Fifty);
        twice.select_preset_amount(PresetAmount::Fifty);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_edit_field_round_trip() {
        let mut form = DonationForm::new();
        let inputs = [
            (DonorField::Name, " Jane  Doe "),
            (DonorField::Email, "not-an-email"),
            (DonorField::CardNumber, "4111 1111 1111 1111"),
            (DonorField::CardExpiry, "13/99"),
            (DonorField::CardCvv, "abcd"),
        ];
        for (field, text) in inputs {
            form.edit_field(field, text);
        }
        for (field, text) in inputs {
            assert_eq!(form.field(field), text);
        }
    }

    #[test]
    fn test_zero_amount_is_invalid_and_state_unchanged() {
        let mut form = filled_form();
        let before = form.clone();
        let notifier = RecordingNotifier::new();

        assert_eq!(form.submit(&notifier), Err(SubmitError::InvalidAmount));
        assert_eq!(form, before);

        let shown = notifier.last().unwrap();
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.title, "Invalid amount");
    }

    #[test]
    fn test_non_numeric_custom_amount_is_invalid() {
        let mut form = filled_form();
        form.edit_custom_amount("abc");
        let before = form.clone();
        let notifier = RecordingNotifier::new();

        assert_eq!(form.submit(&notifier), Err(SubmitError::InvalidAmount));
        assert_eq!(form, before);
        assert_eq!(notifier.received().len(), 1);
    }

    #[test]
    fn test_negative_custom_amount_is_invalid() {
        let mut form = filled_form();
        form.edit_custom_amount("-10");
        assert_eq!(form.final_amount(), Err(SubmitError::InvalidAmount));
    }

    #[test]
    fn test_missing_name_reports_missing_information() {
        let mut form = filled_form();
        form.edit_field(DonorField::Name, "");
        form.select_preset_amount(PresetAmount::TwentyFive);
        let before = form.clone();
        let notifier = RecordingNotifier::new();

        let err = form.submit(&notifier).unwrap_err();
        assert_eq!(err, SubmitError::MissingFields(vec![DonorField::Name]));
        assert_eq!(form, before);
        assert_eq!(notifier.last().unwrap().title, "Missing information");
    }

    #[test]
    fn test_amount_checked_before_fields() {
        let mut form = DonationForm::new();
        assert_eq!(form.validate(), Err(SubmitError::InvalidAmount));
        form.select_preset_amount(PresetAmount::Ten);
        assert_eq!(
            form.validate(),
            Err(SubmitError::MissingFields(vec![
                DonorField::Name,
                DonorField::Email,
                DonorField::CardNumber,
            ]))
        );
    }

    #[test]
    fn test_successful_submit_notifies_and_resets() {
        let mut form = filled_form();
        form.select_donation_type(DonationType::Monthly);
        form.select_preset_amount(PresetAmount::TwentyFive);
        let notifier = RecordingNotifier::new();

        let receipt = form.submit(&notifier).unwrap();
        assert_eq!(receipt.donation_type, DonationType::Monthly);
        assert_eq!(receipt.amount.value(), 25.0);

        let shown = notifier.last().unwrap();
        assert_eq!(shown.kind, NotificationKind::Success);
        assert!(shown.description.contains("monthly"));
        assert!(shown.description.contains("$25"));

        assert_eq!(form.donation_type(), DonationType::Monthly);
        assert_eq!(form.selected_amount(), 0);
        assert_eq!(form.custom_amount(), "");
        assert_eq!(form.details(), &DonorDetails::default());
    }

    #[test]
    fn test_custom_amount_takes_precedence() {
        let mut form = filled_form();
        form.edit_custom_amount("12.5");
        let notifier = RecordingNotifier::new();

        let receipt = form.submit(&notifier).unwrap();
        assert_eq!(receipt.amount.to_string(), "12.5");
        assert_eq!(
            notifier.last().unwrap().description,
            "Your one-time donation of $12.5 has been processed successfully."
        );
    }

    #[test]
    fn test_expiry_and_cvv_not_checked_on_submit() {
        let mut form = filled_form();
        form.edit_field(DonorField::CardExpiry, "");
        form.edit_field(DonorField::CardCvv, "");
        form.select_preset_amount(PresetAmount::OneHundred);
        assert!(form.validate().is_ok());
    }
}
