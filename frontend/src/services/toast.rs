//! Toast notification service.
//!
//! Shared through Leptos context so any component can show a transient
//! message. Implements [`donation::Notifier`] for the donation form.

use gloo_timers::callback::Timeout;
use leptos::*;

use donation::{Notification, Notifier};

use crate::types::{dismiss_toast, push_toast, Toast, ToastId};
use crate::{MAX_TOASTS, TOAST_DURATION_MS};

/// Handle to the page's toast list.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<ToastId>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Toasts currently displayed, oldest first.
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Remove a toast (close button or timer).
    pub fn dismiss(&self, id: ToastId) {
        self.toasts.update(|toasts| dismiss_toast(toasts, id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::debug!("🔔 Toast #{}: {}", id, notification.title);
        self.toasts.update(|toasts| {
            push_toast(toasts, Toast { id, notification }, MAX_TOASTS);
        });

        let service = *self;
        Timeout::new(TOAST_DURATION_MS, move || service.dismiss(id)).forget();
    }
}

/// Register the toast service for the component tree below.
pub fn provide_toast_service() -> ToastService {
    let service = ToastService::new();
    provide_context(service);
    service
}

/// Toast service registered by [`provide_toast_service`].
pub fn use_toast_service() -> ToastService {
    expect_context::<ToastService>()
}
