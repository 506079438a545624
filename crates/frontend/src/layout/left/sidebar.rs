//! Sidebar navigation, grouped by activity.

use crate::shared::icons::icon;
use crate::system::auth::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
    superuser_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Vue d'ensemble",
            items: vec![("/dashboard", "Tableau de bord", "dashboard")],
            superuser_only: false,
        },
        MenuGroup {
            label: "Opérations",
            items: vec![
                ("/dashboard/recharges", "Recharges", "recharge"),
                ("/dashboard/cancellations", "Annulations", "cancellation"),
                ("/dashboard/admin-transactions", "Transactions", "transactions"),
            ],
            superuser_only: false,
        },
        MenuGroup {
            label: "Réseau",
            items: vec![
                ("/dashboard/platform", "Plateformes", "platform"),
                ("/dashboard/cashdesk", "Caisses", "cashdesk"),
                ("/dashboard/users", "Utilisateurs", "users"),
                ("/dashboard/permissions", "Permissions", "permissions"),
            ],
            superuser_only: false,
        },
        MenuGroup {
            label: "Finance",
            items: vec![("/dashboard/commission-config", "Commissions", "commission")],
            superuser_only: true,
        },
    ]
}

/// `/dashboard` is only active on its own, not for its children.
fn is_active(current: &str, path: &str) -> bool {
    let current = current.trim_end_matches('/');
    if path == "/dashboard" {
        current == path
    } else {
        current == path || current.starts_with(&format!("{}/", path))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let is_superuser = session.user().map(|u| u.is_superuser).unwrap_or(false);

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .filter(|group| !group.superuser_only || is_superuser)
                .map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(path, label, icon_name)| {
                                    let pathname = location.pathname;
                                    view! {
                                        <A href=path>
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || is_active(&pathname.get(), path)
                                            >
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(is_active("/dashboard/", "/dashboard"));
        assert!(!is_active("/dashboard/users", "/dashboard"));
        assert!(is_active("/dashboard/users", "/dashboard/users"));
        assert!(!is_active("/dashboard/users-x", "/dashboard/users"));
    }

    #[test]
    fn test_every_screen_is_reachable() {
        let paths: Vec<_> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(path, _, _)| path))
            .collect();
        assert_eq!(paths.len(), 9);
        assert!(paths.iter().all(|p| p.starts_with("/dashboard")));
    }
}
