use contracts::shared::i18n::t;
use leptos::prelude::*;

use super::state::use_storefront;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "nav.home"),
    ("#about", "nav.about"),
    ("#products", "nav.products"),
    ("#contact", "nav.contact"),
];

#[component]
pub fn StoreHeader() -> impl IntoView {
    let ctx = use_storefront();
    let lang = move || ctx.language();
    let menu_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="#home">"Karam Libnan"</a>
            <button
                class="site-header__menu-toggle"
                aria-label="Menu"
                on:click=move |_| menu_open.update(|v| *v = !*v)
            >
                {crate::shared::icons::icon("menu")}
            </button>
            <nav class="site-nav" class:site-nav--open=move || menu_open.get()>
                {NAV_LINKS.into_iter().map(|(href, key)| view! {
                    <a
                        class="site-nav__link"
                        href=href
                        on:click=move |_| menu_open.set(false)
                    >
                        {move || t(key, lang())}
                    </a>
                }).collect_view()}
            </nav>
            <button
                class="site-header__lang"
                title="Language"
                on:click=move |_| ctx.toggle_language()
            >
                {move || lang().toggle_label()}
            </button>
        </header>
    }
}

#[component]
pub fn StoreFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <span>{format!("© {} Karam Libnan", year)}</span>
        </footer>
    }
}
