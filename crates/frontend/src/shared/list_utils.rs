/// Search helpers shared by list screens
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_controller::debounce::Debouncer;

/// Types that can be matched against a free-text search locally.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive containment over several optional fields.
pub fn any_contains<'a>(fields: impl IntoIterator<Item = Option<&'a str>>, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Cell text of an optional field.
pub fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

/// Search box that reports its value once typing has paused for
/// `list.search_debounce_ms`.
#[component]
pub fn SearchInput(
    /// Applied search (initial content of the box)
    #[prop(into)]
    value: Signal<String>,
    /// Receives the stabilized value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Rechercher...".to_string()
    } else {
        placeholder
    };
    let delay = config().list.search_debounce_ms;

    let input_value = RwSignal::new(value.get_untracked());
    let debouncer = StoredValue::new(Debouncer::new());

    on_cleanup(move || {
        let _ = debouncer.try_update_value(|d| d.dispose());
    });

    let handle_input = move |raw: String| {
        input_value.set(raw.clone());
        let Some(ticket) = debouncer.try_update_value(|d| d.input(raw)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(Some(stable)) = debouncer.try_update_value(|d| d.elapsed(ticket)) {
                on_change.run(stable);
            }
        });
    };

    let clear = move |_| {
        input_value.set(String::new());
        let cleared = debouncer.try_update_value(|d| {
            let ticket = d.input("");
            d.elapsed(ticket)
        });
        if let Some(Some(empty)) = cleared {
            on_change.run(empty);
        }
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Effacer" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_contains() {
        let fields = || [Some("Awa Diallo"), None, Some("awa@mobcash.io")];
        assert!(any_contains(fields(), "DIALLO"));
        assert!(any_contains(fields(), " mobcash "));
        assert!(!any_contains(fields(), "koffi"));
        assert!(any_contains(fields(), ""));
    }

    #[test]
    fn test_text_or_dash() {
        assert_eq!(text_or_dash(Some(" MTN ")), "MTN");
        assert_eq!(text_or_dash(Some("  ")), "—");
        assert_eq!(text_or_dash(None), "—");
    }
}
