//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn menu_item(id: &'static str, icon_name: &'static str) -> (&'static str, &'static str, &'static str) {
    (id, tab_label_for_key(id), icon_name)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d400_overview",
            label: tab_label_for_key("d400_overview"),
            icon: "dashboard",
            items: vec![],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "layers",
            items: vec![
                menu_item("a003_product", "products"),
                menu_item("a001_main_category", "folder"),
                menu_item("a002_subcategory", "layers"),
                menu_item("a004_section", "sections"),
            ],
        },
        MenuGroup {
            id: "tools",
            label: "Tools",
            icon: "import",
            items: vec![
                menu_item("u502_media_library", "image"),
                menu_item("u501_import_defaults", "upload"),
                menu_item("u503_export_json", "download"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["catalog".to_string()]);
    let is_active = move |id: &str| ctx.active.with(|a| a.as_deref() == Some(id));

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = group.id;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || !has_children && is_active(group_id)
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| x == group_id) {
                                            items.remove(pos);
                                        } else {
                                            items.push(group_id.to_string());
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|g| g.iter().any(|x| x == group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.with(|g| g.iter().any(|x| x == group_id))>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|(id, label, icon_name)| view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || is_active(id)
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.open_tab(id, label)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_entry_has_a_label() {
        for group in get_menu_groups() {
            assert!(!group.label.is_empty());
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "menu item {} has no label", id);
            }
        }
    }
}
