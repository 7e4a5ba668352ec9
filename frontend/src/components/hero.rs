//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-icon">"❤️"</div>
            <h1>"Make a Donation"</h1>
            <p class="subtitle">
                "Your generous contribution helps us continue our mission "
                "of supporting communities in need."
            </p>
        </section>
    }
}
