//! PageFrame: root wrapper of every admin screen.
//!
//! Sets `id="{entity}--{category}"` and `data-page-category` on the root
//! element so a screen can be found from the DOM inspector.

use leptos::prelude::*;

/// Table of records with create/edit/delete
pub const PAGE_CAT_LIST: &str = "list";

/// Overview with counters and status checks
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// One-shot action (import, export, uploads)
pub const PAGE_CAT_USECASE: &str = "usecase";

/// `{entity}--{category}` with both parts non-empty
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[component]
pub fn PageFrame(
    /// e.g. `"a003_product--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {}", page_id);
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

/// Labelled counter tile
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{crate::shared::icons::icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__value">
                    {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
                </div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a003_product--list"));
        assert!(!is_valid_page_id("a003_product"));
        assert!(!is_valid_page_id("--list"));
    }
}
