use contracts::shared::catalog::{derived_regions, ProductCard};
use leptos::prelude::*;

use super::card::ProductCardView;
use super::state::use_storefront;

/// Rendered region: title and its cards, already localized
#[derive(Clone, PartialEq)]
struct RegionBlock {
    key: String,
    title: String,
    custom: bool,
    cards: Vec<ProductCard>,
}

/// Featured, bestsellers, new arrivals, seasonal, then custom tag regions.
/// A region with no products is not rendered at all.
#[component]
pub fn DerivedRegions() -> impl IntoView {
    let ctx = use_storefront();

    let blocks = Memo::new(move |_| {
        let lang = ctx.applied.with(|f| f.language);
        ctx.regions.with(|registry| {
            ctx.catalog.with(|c| {
                derived_regions(c, registry, lang)
                    .into_iter()
                    .map(|region| RegionBlock {
                        cards: region
                            .products
                            .iter()
                            .map(|p| ProductCard::for_region(c, p, &region.key, lang))
                            .collect(),
                        key: region.key,
                        title: region.title,
                        custom: region.custom,
                    })
                    .collect::<Vec<_>>()
            })
        })
    });

    move || {
        let lang = ctx.language();
        blocks
            .get()
            .into_iter()
            .map(|block| {
                let id = format!("section-{}", block.key);
                view! {
                    <section
                        id=id
                        class="region"
                        class:region--custom=block.custom
                        data-section-key=block.key
                    >
                        <h2 class="region__title">{block.title}</h2>
                        <div class="product-grid">
                            {block
                                .cards
                                .into_iter()
                                .map(|card| view! { <ProductCardView card=card lang=lang /> })
                                .collect_view()}
                        </div>
                    </section>
                }
            })
            .collect_view()
    }
}
