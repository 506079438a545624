use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::notifications::{Notifications, ToastHost};
use crate::system::auth::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Layout state and toasts are shared by every page.
    provide_context(AppGlobalContext::new());
    provide_context(Notifications::new());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppRoutes />
                <ToastHost />
            </SessionProvider>
        </ConfigProvider>
    }
}
