use crate::shared::icons::icon;
use leptos::prelude::*;

/// Side panel showing the selected record.
#[component]
pub fn DetailPanel(
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside class="detail-panel">
            <div class="detail-panel__header">
                <h2 class="detail-panel__title">{move || title.get()}</h2>
                <button class="detail-panel__close" title="Fermer" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <div class="detail-panel__body">{children()}</div>
        </aside>
    }
}

/// One label/value line of a detail panel.
#[component]
pub fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
}

/// Label with arbitrary content, e.g. a status badge.
#[component]
pub fn DetailItem(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{children()}</span>
        </div>
    }
}

/// Placeholder content of a secondary slot while it loads or after it failed.
#[component]
pub fn SlotMessage(#[prop(into)] text: String) -> impl IntoView {
    view! { <div class="detail-panel__placeholder">{text}</div> }
}
