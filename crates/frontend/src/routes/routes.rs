use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes, A};
use leptos_router::path;

use crate::dashboards::StatisticsDashboard;
use crate::domain::a001_recharge::ui::list::RechargeList;
use crate::domain::a002_cancellation::ui::list::CancellationList;
use crate::domain::a003_platform::ui::list::PlatformList;
use crate::domain::a004_cash_desk::ui::list::CashDeskList;
use crate::domain::a005_user::ui::list::UserList;
use crate::domain::a006_permission::ui::list::PermissionList;
use crate::domain::a008_commission_config::ui::page::CommissionConfigPage;
use crate::domain::a009_transaction::ui::list::TransactionList;
use crate::layout::Shell;
use crate::system::auth::guard::{RedirectIfAuthenticated, RequireAuth};
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::sign_up::SignUpPage;

#[component]
fn AuthenticatedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1>"Page introuvable"</h1>
            <A href="/dashboard">"Retour au tableau de bord"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                <Route
                    path=path!("/login")
                    view=|| view! { <RedirectIfAuthenticated><LoginPage /></RedirectIfAuthenticated> }
                />
                <Route
                    path=path!("/sign-up")
                    view=|| view! { <RedirectIfAuthenticated><SignUpPage /></RedirectIfAuthenticated> }
                />
                <ParentRoute path=path!("") view=AuthenticatedShell>
                    <Route path=path!("/dashboard") view=StatisticsDashboard />
                    <Route path=path!("/dashboard/recharges") view=RechargeList />
                    <Route path=path!("/dashboard/cancellations") view=CancellationList />
                    <Route path=path!("/dashboard/platform") view=PlatformList />
                    <Route path=path!("/dashboard/cashdesk") view=CashDeskList />
                    <Route path=path!("/dashboard/users") view=UserList />
                    <Route path=path!("/dashboard/admin-transactions") view=TransactionList />
                    <Route path=path!("/dashboard/permissions") view=PermissionList />
                    <Route path=path!("/dashboard/commission-config") view=CommissionConfigPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
