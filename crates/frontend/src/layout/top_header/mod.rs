//! Top bar: sidebar toggle, brand, current operator and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::use_session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            navigate("/login", Default::default());
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Masquer le menu" } else { "Afficher le menu" }
                >
                    {icon("dashboard")}
                </button>
                <span class="top-header__title">"MobCash Admin"</span>
            </div>

            <div class="top-header__actions">
                {move || session.user().map(|user| view! {
                    <A href="/profile">
                        <div class="top-header__user">
                            <span class="avatar">{user.initials()}</span>
                            <span class="top-header__user-name">{user.display_name()}</span>
                        </div>
                    </A>
                })}
                <button class="top-header__icon-btn" on:click=logout title="Se déconnecter">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
