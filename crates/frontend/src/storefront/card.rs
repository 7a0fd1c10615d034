use contracts::enums::Language;
use contracts::shared::catalog::ProductCard;
use contracts::shared::i18n::t;
use leptos::prelude::*;

use crate::shared::image::FallbackImage;
use crate::shared::list_utils::render_segments;

fn chip_list(items: Vec<String>, class: &'static str) -> impl IntoView {
    view! {
        <ul class=class>
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn ProductCardView(card: ProductCard, lang: Language) -> impl IntoView {
    let alt = card.plain_name();
    let ProductCard {
        id,
        name,
        description,
        ingredients,
        variants,
        tags,
        image,
        fallback_image,
        badge,
        subcategory_label,
    } = card;

    view! {
        <article class="product-card" data-product-id=id>
            <div class="product-card__media">
                <FallbackImage
                    src=image
                    alt=alt
                    class="product-card__image"
                    fallback=fallback_image
                />
                {badge.then(|| view! {
                    <span class="product-card__badge">{t("products.featured", lang)}</span>
                })}
            </div>
            <div class="product-card__body">
                <span class="product-card__category">{subcategory_label}</span>
                <h3 class="product-card__title">{render_segments(name)}</h3>
                <p class="product-card__description">{render_segments(description)}</p>
                {(!ingredients.is_empty()).then(|| view! {
                    <div class="product-card__group">
                        <h4>{t("products.ingredients", lang)}</h4>
                        {chip_list(ingredients, "product-card__list")}
                    </div>
                })}
                {(!variants.is_empty()).then(|| view! {
                    <div class="product-card__group">
                        <h4>{t("products.variants", lang)}</h4>
                        {chip_list(variants, "product-card__list")}
                    </div>
                })}
                {(!tags.is_empty()).then(|| chip_list(tags, "product-card__tags"))}
            </div>
        </article>
    }
}
