//! On-screen toast list.
//!
//! Displays what [`crate::services::ToastService`] holds; toasts leave on
//! their own timer or through the close button.

use leptos::*;

use crate::services::use_toast_service;

#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast_service();
    let toasts = service.toasts();

    view! {
        <div class="toaster" role="status">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.css_class()>
                            <div class="toast-body">
                                <div class="toast-title">{toast.emoji()} " " {toast.notification.title.clone()}</div>
                                <div class="toast-description">{toast.notification.description.clone()}</div>
                            </div>
                            <button
                                type="button"
                                class="toast-close"
                                on:click=move |_| service.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
