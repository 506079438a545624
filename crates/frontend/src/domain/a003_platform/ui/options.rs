use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_platform::api;
use crate::shared::notifications::use_notifications;

/// Platforms offered in the selects of another screen, fetched once when the
/// screen mounts.
pub fn use_platform_options(context: &'static str) -> ReadSignal<Vec<(i64, String)>> {
    let (options, set_options) = signal(Vec::new());
    let notifications = use_notifications();
    spawn_local(async move {
        match api::fetch_options().await {
            Ok(loaded) => {
                let _ = set_options.try_set(loaded);
            }
            Err(err) => notifications.report(&err, context),
        }
    });
    options
}

/// Filter select options: the wildcard first, then one entry per platform.
pub fn platform_filter_options(platforms: &[(i64, String)]) -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "Toutes les plateformes".to_string()))
        .chain(platforms.iter().map(|(id, name)| (id.to_string(), name.clone())))
        .collect()
}

/// Selected platform id of a form select; `0` when nothing is selected.
pub fn selected_platform(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Platform picker of a form, with its validation message.
#[component]
pub fn PlatformSelect(
    value: RwSignal<String>,
    options: ReadSignal<Vec<(i64, String)>>,
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class=move || if error.get().is_some() { "form-field form-field--invalid" } else { "form-field" }>
            <Label>"Plateforme"</Label>
            <Select value=value>
                <option value="">"Sélectionnez une plateforme"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                        .collect_view()
                }}
            </Select>
            {move || error.get().map(|message| view! { <span class="form-field__error">{message}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_filter_options() {
        let options = platform_filter_options(&[(4, "1xBet".to_string()), (9, "Melbet".to_string())]);
        assert_eq!(options[0].0, "all");
        assert_eq!(options[1], ("4".to_string(), "1xBet".to_string()));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_selected_platform() {
        assert_eq!(selected_platform("12"), 12);
        assert_eq!(selected_platform(""), 0);
        assert_eq!(selected_platform("all"), 0);
    }
}
