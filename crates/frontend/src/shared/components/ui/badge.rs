use contracts::domain::a007_commission::aggregate::CommissionStatus;
use contracts::domain::a009_transaction::aggregate::TransactionStatus;
use contracts::shared::review::ReviewStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}

/// Statuses that render as a coloured badge.
pub trait BadgeStatus {
    fn badge_variant(&self) -> &'static str;
    fn badge_label(&self) -> &'static str;
}

impl BadgeStatus for ReviewStatus {
    fn badge_variant(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "warning",
            ReviewStatus::Approved => "success",
            ReviewStatus::Rejected => "error",
            ReviewStatus::Expired | ReviewStatus::Unknown => "neutral",
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

impl BadgeStatus for TransactionStatus {
    fn badge_variant(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "warning",
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "error",
            TransactionStatus::Cancelled | TransactionStatus::Unknown => "neutral",
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

impl BadgeStatus for CommissionStatus {
    fn badge_variant(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "warning",
            CommissionStatus::Paid => "success",
            CommissionStatus::Unknown => "neutral",
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

/// Active/inactive flag of platforms, cash desks and users.
pub struct ActiveFlag(pub bool);

impl BadgeStatus for ActiveFlag {
    fn badge_variant(&self) -> &'static str {
        if self.0 {
            "success"
        } else {
            "neutral"
        }
    }

    fn badge_label(&self) -> &'static str {
        if self.0 {
            "Actif"
        } else {
            "Inactif"
        }
    }
}

#[component]
pub fn StatusBadge<S: BadgeStatus + Send + 'static>(status: S) -> impl IntoView {
    let variant = status.badge_variant();
    let label = status.badge_label();
    view! { <Badge variant=variant>{label}</Badge> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_row_badge<S: BadgeStatus + Send + 'static>(status: S, variant: &str, label: &str) {
        assert_eq!(status.badge_variant(), variant);
        assert_eq!(status.badge_label(), label);
    }

    #[test]
    fn test_row_statuses_render_as_sendable_badges() {
        assert_row_badge(ActiveFlag(true), "success", "Actif");
        assert_row_badge(ActiveFlag(false), "neutral", "Inactif");
        assert_row_badge(ReviewStatus::Pending, "warning", ReviewStatus::Pending.label());
        assert_row_badge(TransactionStatus::Failed, "error", TransactionStatus::Failed.label());
        assert_row_badge(CommissionStatus::Paid, "success", CommissionStatus::Paid.label());
    }
}
