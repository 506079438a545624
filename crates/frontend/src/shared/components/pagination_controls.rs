use crate::shared::icons::icon;
use crate::shared::list_controller::{page_window, PageToken};
use leptos::prelude::*;

/// Page buttons rendered from the page window, with first/previous/next
/// buttons and a page-size selector. Renders nothing when there are no pages.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    page_size: Signal<u32>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,

    /// Defaults to `list.page_size_options` from the configuration
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options
        .unwrap_or_else(|| crate::shared::config::config().list.page_size_options.clone());

    let go = move |page: u32| {
        if page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get().saturating_sub(1).max(1))
                    disabled=move || current_page.get() <= 1
                    title="Page précédente"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|token| match token {
                            PageToken::Page(page) => view! {
                                <button
                                    class=if page == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                    on:click=move |_| go(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageToken::Ellipsis => view! {
                                <span class="pagination-ellipsis">"…"</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| go((current_page.get() + 1).min(total_pages.get()))
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Page suivante"
                >
                    {icon("chevron-right")}
                </button>
                <span class="pagination-info">
                    {move || format!("{} résultat(s)", total_count.get())}
                </span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts
                        .iter()
                        .map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {format!("{} / page", size)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </Show>
    }
}
