//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_recharge--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it leads to `domain/a001_recharge/`.

use leptos::prelude::*;

/// Table with filters, pagination and a detail panel.
pub const PAGE_CAT_LIST: &str = "list";

/// Statistics overview.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login, sign-up and profile pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `true` when `id` has the `{entity}--{category}` shape with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => {
            !entity.is_empty()
                && [PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM].contains(&category)
        }
        None => false,
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "malformed page id {page_id}");
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_recharge--list"));
        assert!(is_valid_page_id("d400_statistics--dashboard"));
        assert!(!is_valid_page_id("a001_recharge"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_recharge--detail"));
    }
}
