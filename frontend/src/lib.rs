//! Donation page - Frontend Rust/Leptos Application
//!
//! A WebAssembly page where donors choose a donation type and amount,
//! enter contact and payment details and submit. Submission is validated
//! locally by [`donation::DonationForm`]; nothing leaves the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DonationPage                                                │
//! │  ├── Hero (title, mission)                                  │
//! │  ├── DonationFormCard (type, amount, donor, payment)        │
//! │  └── ImpactSection                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster (notifications overlay)                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Toast, ImpactTier)
//! - [`components`] - UI components (Header, DonationFormCard, Toaster, etc.)
//! - [`services`] - Toast notification service

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{ImpactTier, Toast, ToastId, IMPACT_TIERS};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and console logging, then mount the app.
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting donation page", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toast_service();

    view! {
        <Title text=format!("Donate - {}", APP_NAME)/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=DonationPage/>
                    <Route path="/donate" view=DonationPage/>
                </Routes>
            </main>
            <Footer/>
            <Toaster/>
        </Router>
    }
}

#[component]
fn DonationPage() -> impl IntoView {
    view! {
        <Hero/>
        <div class="container">
            <DonationFormCard/>
        </div>
        <ImpactSection/>
    }
}
