//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - transient notifications on screen
//! - **Impact Types** - "Your Impact" cards

use donation::{Notification, NotificationKind};

// =============================================================================
// Toast Types
// =============================================================================

/// Identifier of a displayed toast.
pub type ToastId = u64;

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique per page session
    pub id: ToastId,
    /// Content and severity
    pub notification: Notification,
}

impl Toast {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self.notification.kind {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self.notification.kind {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
        }
    }
}

/// Append a toast, dropping the oldest ones beyond `max`.
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let excess = toasts.len() - max;
        toasts.drain(..excess);
    }
}

/// Remove a toast if it is still displayed.
pub fn dismiss_toast(toasts: &mut Vec<Toast>, id: ToastId) {
    toasts.retain(|t| t.id != id);
}

// =============================================================================
// Impact Types
// =============================================================================

/// What a given amount pays for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactTier {
    pub amount: u32,
    pub description: &'static str,
}

/// Cards shown in the "Your Impact" section.
pub const IMPACT_TIERS: [ImpactTier; 3] = [
    ImpactTier {
        amount: 50,
        description: "Provides meals for a family for a week",
    },
    ImpactTier {
        amount: 100,
        description: "Supplies school materials for 10 children",
    },
    ImpactTier {
        amount: 250,
        description: "Supports healthcare for a family in need",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: ToastId) -> Toast {
        Toast {
            id,
            notification: Notification::success("t", format!("toast {}", id)),
        }
    }

    #[test]
    fn test_push_toast_drops_oldest() {
        let mut toasts = Vec::new();
        for id in 0..5 {
            push_toast(&mut toasts, toast(id), 3);
        }
        let ids: Vec<ToastId> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_dismiss_unknown_toast_is_noop() {
        let mut toasts = vec![toast(1), toast(2)];
        dismiss_toast(&mut toasts, 7);
        assert_eq!(toasts.len(), 2);
        dismiss_toast(&mut toasts, 1);
        assert_eq!(toasts, vec![toast(2)]);
    }

    #[test]
    fn test_toast_class_follows_kind() {
        let error = Toast {
            id: 0,
            notification: Notification::error("Invalid amount", "x"),
        };
        assert_eq!(error.css_class(), "toast toast-error");
        assert_eq!(toast(1).css_class(), "toast toast-success");
    }
}
