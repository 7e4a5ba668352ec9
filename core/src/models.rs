//! Domain values for the donation form.
//!
//! # Categories
//!
//! - **Donation type** - one-time or monthly
//! - **Preset amounts** - the fixed quick-select values
//! - **Donor fields** - contact and payment text inputs

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Donation Type
// =============================================================================

/// Whether the donation is a single charge or a monthly one.
///
/// Recurrence is only recorded, never scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonationType {
    /// Single charge
    #[default]
    OneTime,
    /// Recurring monthly charge
    Monthly,
}

impl DonationType {
    /// Both types, in display order.
    pub const ALL: [DonationType; 2] = [DonationType::OneTime, DonationType::Monthly];

    /// Identifier used in messages (`one-time`, `monthly`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationType::OneTime => "one-time",
            DonationType::Monthly => "monthly",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            DonationType::OneTime => "One-Time Donation",
            DonationType::Monthly => "Monthly Donation",
        }
    }
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Preset Amounts
// =============================================================================

/// One of the suggested donation values offered as quick-select buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PresetAmount {
    Ten,
    TwentyFive,
    Fifty,
    OneHundred,
    TwoHundredFifty,
    FiveHundred,
}

impl PresetAmount {
    /// All presets, ascending.
    pub const ALL: [PresetAmount; 6] = [
        PresetAmount::Ten,
        PresetAmount::TwentyFive,
        PresetAmount::Fifty,
        PresetAmount::OneHundred,
        PresetAmount::TwoHundredFifty,
        PresetAmount::FiveHundred,
    ];

    /// Whole-unit value of the preset.
    pub fn value(&self) -> u32 {
        match self {
            PresetAmount::Ten => 10,
            PresetAmount::TwentyFive => 25,
            PresetAmount::Fifty => 50,
            PresetAmount::OneHundred => 100,
            PresetAmount::TwoHundredFifty => 250,
            PresetAmount::FiveHundred => 500,
        }
    }

    /// Look up the preset for a value, `None` if it is not offered.
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

impl TryFrom<u32> for PresetAmount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("{} is not a preset amount", value))
    }
}

impl From<PresetAmount> for u32 {
    fn from(preset: PresetAmount) -> Self {
        preset.value()
    }
}

impl fmt::Display for PresetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// =============================================================================
// Donor Fields
// =============================================================================

/// A contact or payment text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DonorField {
    Name,
    Email,
    CardNumber,
    CardExpiry,
    CardCvv,
}

impl DonorField {
    /// All fields, in form order.
    pub const ALL: [DonorField; 5] = [
        DonorField::Name,
        DonorField::Email,
        DonorField::CardNumber,
        DonorField::CardExpiry,
        DonorField::CardCvv,
    ];

    /// Lowercase name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            DonorField::Name => "name",
            DonorField::Email => "email",
            DonorField::CardNumber => "card number",
            DonorField::CardExpiry => "expiry date",
            DonorField::CardCvv => "cvv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonorField::Name => "Full Name *",
            DonorField::Email => "Email Address *",
            DonorField::CardNumber => "Card Number *",
            DonorField::CardExpiry => "Expiry Date *",
            DonorField::CardCvv => "CVV *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DonorField::Name => "John Doe",
            DonorField::Email => "john@example.com",
            DonorField::CardNumber => "1234 5678 9012 3456",
            DonorField::CardExpiry => "MM/YY",
            DonorField::CardCvv => "123",
        }
    }

    /// HTML `type` attribute of the input.
    pub fn input_type(&self) -> &'static str {
        match self {
            DonorField::Email => "email",
            _ => "text",
        }
    }

    /// Checked by [`crate::DonationForm::submit`].
    ///
    /// Expiry and CVV are only marked `required` in the rendered input.
    pub fn is_required_on_submit(&self) -> bool {
        matches!(
            self,
            DonorField::Name | DonorField::Email | DonorField::CardNumber
        )
    }
}

/// Contact and payment text, stored exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDetails {
    pub name: String,
    pub email: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvv: String,
}

impl DonorDetails {
    pub fn get(&self, field: DonorField) -> &str {
        match field {
            DonorField::Name => &self.name,
            DonorField::Email => &self.email,
            DonorField::CardNumber => &self.card_number,
            DonorField::CardExpiry => &self.card_expiry,
            DonorField::CardCvv => &self.card_cvv,
        }
    }

    pub fn set(&mut self, field: DonorField, text: impl Into<String>) {
        let slot = match field {
            DonorField::Name => &mut self.name,
            DonorField::Email => &mut self.email,
            DonorField::CardNumber => &mut self.card_number,
            DonorField::CardExpiry => &mut self.card_expiry,
            DonorField::CardCvv => &mut self.card_cvv,
        };
        *slot = text.into();
    }

    /// Required fields that are empty, in form order.
    pub fn missing_required(&self) -> Vec<DonorField> {
        DonorField::ALL
            .into_iter()
            .filter(|f| f.is_required_on_submit() && self.get(*f).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donation_type_default_and_names() {
        assert_eq!(DonationType::default(), DonationType::OneTime);
        assert_eq!(DonationType::OneTime.to_string(), "one-time");
        assert_eq!(DonationType::Monthly.to_string(), "monthly");
        assert_eq!(
            serde_json::to_string(&DonationType::OneTime).unwrap(),
            "\"one-time\""
        );
    }

    #[test]
    fn test_preset_lookup() {
        let values: Vec<u32> = PresetAmount::ALL.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![10, 25, 50, 100, 250, 500]);
        assert_eq!(PresetAmount::from_value(250), Some(PresetAmount::TwoHundredFifty));
        assert_eq!(PresetAmount::from_value(0), None);
        assert_eq!(PresetAmount::from_value(75), None);
    }

    #[test]
    fn test_preset_serde_as_number() {
        assert_eq!(serde_json::to_string(&PresetAmount::Fifty).unwrap(), "50");
        let parsed: PresetAmount = serde_json::from_str("100").unwrap();
        assert_eq!(parsed, PresetAmount::OneHundred);
        assert!(serde_json::from_str::<PresetAmount>("42").is_err());
    }

    #[test]
    fn test_missing_required_ignores_expiry_and_cvv() {
        let details = DonorDetails {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            card_number: "4111111111111111".into(),
            ..Default::default()
        };
        assert!(details.missing_required().is_empty());

        let empty = DonorDetails::default();
        assert_eq!(
            empty.missing_required(),
            vec![DonorField::Name, DonorField::Email, DonorField::CardNumber]
        );
    }

    #[test]
    fn test_set_and_get_keep_text_verbatim() {
        let mut details = DonorDetails::default();
        for field in DonorField::ALL {
            let text = format!("  {} value ", field.name());
            details.set(field, text.clone());
            assert_eq!(details.get(field), text);
        }
    }
}
