//! "Your Impact" section: what typical amounts pay for.

use leptos::*;

use crate::components::Card;
use crate::types::IMPACT_TIERS;
use crate::CURRENCY_SYMBOL;

#[component]
pub fn ImpactSection() -> impl IntoView {
    view! {
        <section class="impact">
            <h2>"Your Impact"</h2>
            <div class="grid grid-3">
                {IMPACT_TIERS
                    .into_iter()
                    .map(|tier| view! {
                        <Card class="impact-card">
                            <div class="impact-amount">{format!("{}{}", CURRENCY_SYMBOL, tier.amount)}</div>
                            <p class="impact-text">{tier.description}</p>
                        </Card>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
