use leptos::*;
use leptos_router::A;

use crate::APP_NAME;

/// Top navigation bar. Purely decorative, no state.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <nav class="header-right">
                <A href="/" class="nav-link">"Home"</A>
                <A href="/donate" class="nav-link nav-cta">"Donate"</A>
            </nav>
        </header>
    }
}
