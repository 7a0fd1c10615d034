//! Page regions patched from section records: hero and about

use contracts::enums::Language;
use contracts::shared::catalog::model::SectionEntry;
use contracts::shared::i18n::t;
use leptos::prelude::*;

use super::state::use_storefront;
use crate::shared::image::FallbackImage;

fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn hero_view(entry: Option<SectionEntry>, lang: Language) -> AnyView {
    let Some(entry) = entry else {
        return view! {
            <section id="home" class="hero">
                <h1 class="hero__title">"Karam Libnan"</h1>
            </section>
        }
        .into_any();
    };

    let title = entry.title_for(lang).unwrap_or("Karam Libnan").to_string();
    let lead = entry.body.get(lang).to_string();
    let background = entry.background_style();
    let overlay = entry.overlay_style();

    view! {
        <section id="home" class="hero" style=background>
            {(!overlay.is_empty()).then(|| view! { <div class="hero__overlay" style=overlay></div> })}
            <div class="hero__content">
                <h1 class="hero__title">{title}</h1>
                {(!lead.is_empty()).then(|| view! { <p class="hero__lead">{lead}</p> })}
                <a class="hero__cta" href="#products">{t("nav.products", lang)}</a>
            </div>
        </section>
    }
    .into_any()
}

fn about_view(entry: Option<SectionEntry>, lang: Language) -> AnyView {
    let Some(entry) = entry else {
        return ().into_any();
    };

    let heading = entry
        .title_for(lang)
        .unwrap_or_else(|| t("nav.about", lang))
        .to_string();
    let body = paragraphs(entry.body.get(lang));
    let image = entry.image.clone();

    view! {
        <section id="about" class="about">
            <div class="about__text">
                <h2>{heading}</h2>
                {body.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
            {image.map(|src| view! {
                <FallbackImage src=src alt="About Karam Libnan" class="about__image" />
            })}
        </section>
    }
    .into_any()
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_storefront();
    move || {
        let lang = ctx.language();
        let entry = ctx.catalog.with(|c| c.section("hero").cloned());
        hero_view(entry, lang)
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let ctx = use_storefront();
    move || {
        let lang = ctx.language();
        let entry = ctx.catalog.with(|c| c.section("about").cloned());
        about_view(entry, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(
            paragraphs("First part.\n\n  Second part.\n\n\n"),
            vec!["First part.".to_string(), "Second part.".to_string()]
        );
        assert!(paragraphs("   ").is_empty());
    }
}
