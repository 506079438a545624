use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Header of a list page: title, count badge, refresh button and optional
/// extra actions.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Total number of records, shown as a badge
    #[prop(optional, into)]
    count: Option<Signal<u64>>,

    #[prop(into)]
    loading: Signal<bool>,

    on_refresh: Callback<()>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {count.map(|count| view! {
                    <Badge variant="primary">{move || count.get().to_string()}</Badge>
                })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Chargement..." } else { " Actualiser" }}
                </Button>
            </div>
        </div>
    }
}
