use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders `children` for an authenticated operator, otherwise sends the
/// browser to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Inverse guard for the login and sign-up pages.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || !session.is_authenticated()
            fallback=|| view! { <Redirect path="/dashboard" /> }
        >
            {children()}
        </Show>
    }
}
