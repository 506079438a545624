use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_controller::ListHandle;
use leptos::prelude::*;

/// Filter options of a select, led by the `"all"` wildcard.
pub fn with_all_option(
    all_label: &str,
    options: impl IntoIterator<Item = (&'static str, &'static str)>,
) -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), all_label.to_string()))
        .chain(
            options
                .into_iter()
                .map(|(value, label)| (value.to_string(), label.to_string())),
        )
        .collect()
}

/// [`FilterPanel`] bound to a list: search, filter count and pagination all
/// read from and write to the list's controller.
#[component]
pub fn ListFilters<T: Clone + Send + Sync + 'static>(
    list: ListHandle<T>,
    #[prop(optional, into)]
    search_placeholder: String,
    #[prop(optional, into)]
    filter_content: ViewFn,
) -> impl IntoView {
    let state = list.state;
    let search = Signal::derive(move || state.with(|s| s.query().search.clone()));
    let active_filters_count = Signal::derive(move || {
        state.with(|s| {
            let query = s.query();
            query.filters.active().count() + usize::from(!query.search.trim().is_empty())
        })
    });

    let pagination = move || {
        view! {
            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page()))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.count()))
                page_size=Signal::derive(move || state.with(|s| s.query().page_size))
                on_page_change=Callback::new(move |page| list.set_page(page))
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
            />
        }
    };

    view! {
        <FilterPanel
            search=search
            on_search=Callback::new(move |value: String| list.apply_search(value))
            search_placeholder=search_placeholder
            active_filters_count=active_filters_count
            pagination_controls=pagination
            filter_content=filter_content
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_all_option() {
        let options = with_all_option("Tous", [("pending", "En attente"), ("paid", "Payée")]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], ("all".to_string(), "Tous".to_string()));
        assert_eq!(options[2].0, "paid");
    }
}
