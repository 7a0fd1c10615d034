//! Product catalog: main-type tabs, subcategory filters, search, banner and grid

use contracts::shared::catalog::{region_header, visible_products, CategoryBanner, ProductCard};
use contracts::shared::i18n::t;
use leptos::prelude::*;

use super::card::ProductCardView;
use super::state::use_storefront;
use crate::shared::image::FallbackImage;
use crate::shared::list_utils::SearchInput;

#[component]
fn MainTypeTabs() -> impl IntoView {
    let ctx = use_storefront();

    let tabs = move || {
        let lang = ctx.language();
        ctx.catalog.with(|c| {
            c.main_categories
                .iter()
                .map(|m| (m.slug.clone(), m.title.get(lang).to_string()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="catalog__tabs" role="tablist">
            <For
                each=tabs
                key=|(slug, title)| format!("{}:{}", slug, title)
                children=move |(slug, title)| {
                    let slug_for_active = slug.clone();
                    view! {
                        <button
                            role="tab"
                            class="catalog__tab"
                            class:catalog__tab--active=move || {
                                ctx.filter.with(|f| f.main_type == slug_for_active)
                            }
                            on:click=move |_| ctx.select_main_type(&slug)
                        >
                            {title}
                        </button>
                    }
                }
            />
        </div>
    }
}

#[component]
fn SubcategoryFilters() -> impl IntoView {
    let ctx = use_storefront();

    let buttons = move || {
        let (main_type, lang) = ctx.filter.with(|f| (f.main_type.clone(), f.language));
        ctx.catalog.with(|c| {
            c.registry
                .entries(&main_type)
                .into_iter()
                .map(|e| (e.key.clone(), e.label(lang)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="catalog__filters">
            <For
                each=buttons
                key=|(key, label)| format!("{}:{}", key, label)
                children=move |(key, label)| {
                    let key_for_active = key.clone();
                    view! {
                        <button
                            class="catalog__filter"
                            class:catalog__filter--active=move || {
                                ctx.filter.with(|f| f.subcategory == key_for_active)
                            }
                            on:click=move |_| ctx.select_subcategory(&key)
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}

#[component]
fn CategoryBannerView() -> impl IntoView {
    let ctx = use_storefront();

    move || {
        let banner = ctx
            .applied
            .with(|state| ctx.catalog.with(|c| CategoryBanner::build(c, state)));
        let CategoryBanner { title, image } = banner;
        view! {
            <div class="catalog__banner">
                <FallbackImage src=image alt=title.clone() class="catalog__banner-image" />
                <h3 class="catalog__banner-title">{title}</h3>
            </div>
        }
    }
}

#[component]
fn ProductGrid() -> impl IntoView {
    let ctx = use_storefront();

    let cards = Memo::new(move |_| {
        ctx.applied.with(|state| {
            ctx.catalog.with(|c| {
                let term = state.search_term();
                visible_products(c, state)
                    .into_iter()
                    .map(|p| ProductCard::build(c, p, state.language, &term))
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
        <Show
            when=move || cards.with(|c| !c.is_empty())
            fallback=move || view! {
                <p class="catalog__empty">{t("products.empty", ctx.language())}</p>
            }
        >
            <div class="product-grid">
                {move || {
                    let lang = ctx.language();
                    cards
                        .get()
                        .into_iter()
                        .map(|card| view! { <ProductCardView card=card lang=lang /> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn CatalogSection() -> impl IntoView {
    let ctx = use_storefront();
    let lang = move || ctx.language();
    let search = Signal::derive(move || ctx.filter.with(|f| f.search.clone()));
    let header = Memo::new(move |_| {
        let lang = lang();
        ctx.catalog
            .with(|c| region_header(c, "products", "products.title", Some("products.intro"), lang))
    });

    view! {
        <section id="products" class="catalog">
            <div class="catalog__header">
                <h2>{move || header.with(|h| h.title.clone())}</h2>
                <p class="catalog__intro">{move || header.with(|h| h.intro.clone())}</p>
            </div>
            <MainTypeTabs />
            <div class="catalog__toolbar">
                <SubcategoryFilters />
                <SearchInput
                    value=search
                    on_change=Callback::new(move |text: String| ctx.set_search(text))
                    placeholder=Signal::derive(move || t("products.search", lang()).to_string())
                    class="catalog__search"
                />
            </div>
            <Show when=move || ctx.loading.get()>
                <p class="catalog__loading">{move || t("status.loading", lang())}</p>
            </Show>
            <Show when=move || ctx.load_failures.with(|f| !f.is_empty())>
                <p class="catalog__status catalog__status--error" role="status">
                    {move || t("status.loadFailed", lang())}
                </p>
            </Show>
            <CategoryBannerView />
            <ProductGrid />
        </section>
    }
}
