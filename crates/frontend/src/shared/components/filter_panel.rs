use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;

/// Filter bar of a list screen: debounced search, the screen's own filter
/// selects and the pagination controls.
#[component]
pub fn FilterPanel(
    /// Applied search string
    #[prop(into)]
    search: Signal<String>,

    on_search: Callback<String>,

    #[prop(optional, into)]
    search_placeholder: String,

    /// Number of restricting filters, shown as a badge
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls slot
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter selects slot
    #[prop(optional, into)]
    filter_content: ViewFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtres"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>
            <div class="filter-panel-content">
                <SearchInput value=search on_change=on_search placeholder=search_placeholder />
                {filter_content.run()}
            </div>
        </div>
    }
}

/// A labelled `<select>` over `(value, label)` options, the first of which is
/// normally the `"all"` wildcard.
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                class="filter-select__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option value=option_value selected=move || value.get() == selected_value>
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
