//! Donation form component.
//!
//! Thin adapter over [`donation::DonationForm`]: every event handler calls
//! one transition and the view reads back from the same signal.

use leptos::*;

use donation::{DonationForm, DonationType, DonorField, PresetAmount};

use crate::components::{Card, TextField, ToggleButton};
use crate::services::use_toast_service;
use crate::CURRENCY_SYMBOL;

#[component]
pub fn DonationFormCard() -> impl IntoView {
    let form = create_rw_signal(DonationForm::new());
    let toasts = use_toast_service();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Submit on a copy so the toast update never runs inside a form borrow
        let mut next = form.get_untracked();
        if next.submit(&toasts).is_ok() {
            log::info!("💚 Donation form reset");
        }
        form.set(next);
    };

    let field_input = move |field: DonorField| {
        view! {
            <TextField
                label=field.label()
                placeholder=field.placeholder()
                input_type=field.input_type()
                required=true
                value=Signal::derive(move || form.with(|f| f.field(field).to_string()))
                on_input=move |text: String| form.update(|f| f.edit_field(field, text))
            />
        }
    };

    view! {
        <Card class="donation-card">
            <form class="donation-form" on:submit=on_submit>
                // Donation type
                <div class="form-section">
                    <h2>"Donation Type"</h2>
                    <div class="grid grid-2">
                        {DonationType::ALL
                            .into_iter()
                            .map(|donation_type| view! {
                                <ToggleButton
                                    active=Signal::derive(move || form.with(|f| f.donation_type() == donation_type))
                                    on_click=move |_| form.update(|f| f.select_donation_type(donation_type))
                                >
                                    {donation_type.label()}
                                </ToggleButton>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Amount
                <div class="form-section">
                    <h2>"Select Amount"</h2>
                    <div class="grid grid-6">
                        {PresetAmount::ALL
                            .into_iter()
                            .map(|preset| view! {
                                <ToggleButton
                                    active=Signal::derive(move || form.with(|f| f.is_preset_active(preset)))
                                    active_class="toggle-accent"
                                    on_click=move |_| form.update(|f| f.select_preset_amount(preset))
                                >
                                    {format!("{}{}", CURRENCY_SYMBOL, preset)}
                                </ToggleButton>
                            })
                            .collect_view()}
                    </div>
                    <TextField
                        placeholder="Enter custom amount"
                        input_type="number"
                        class="input-lg"
                        value=Signal::derive(move || form.with(|f| f.custom_amount().to_string()))
                        on_input=move |text: String| form.update(|f| f.edit_custom_amount(text))
                    />
                </div>

                // Donor information
                <div class="form-section">
                    <h2>"Your Information"</h2>
                    <div class="grid grid-2">
                        {field_input(DonorField::Name)}
                        {field_input(DonorField::Email)}
                    </div>
                </div>

                // Payment details
                <div class="form-section">
                    <h2>"💳 Payment Details"</h2>
                    {field_input(DonorField::CardNumber)}
                    <div class="grid grid-2">
                        {field_input(DonorField::CardExpiry)}
                        {field_input(DonorField::CardCvv)}
                    </div>
                </div>

                <div class="security-note">
                    <span class="security-icon">"🛡️"</span>
                    <p>
                        "Your payment information is secure and encrypted. "
                        "We never store your complete card details."
                    </p>
                </div>

                <button type="submit" class="submit-button">"Complete Donation"</button>
            </form>
        </Card>
    }
}
