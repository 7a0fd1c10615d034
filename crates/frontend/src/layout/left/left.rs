use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible sidebar column: brand, menu, link back to the storefront
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__brand">
                <span class="app-sidebar__brand-name">"Karam Libnan"</span>
                <span class="app-sidebar__brand-tag">"Admin"</span>
            </div>
            {children()}
            <a class="app-sidebar__footer-link" href="./" target="_blank">
                {icon("external")}
                <span>"View site"</span>
            </a>
        </aside>
    }
}
