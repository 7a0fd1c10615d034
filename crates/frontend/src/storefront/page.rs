use leptos::prelude::*;
use leptos::task::spawn_local;

use super::catalog::CatalogSection;
use super::contact::ContactSection;
use super::header::{StoreFooter, StoreHeader};
use super::hero::{AboutSection, HeroSection};
use super::loader::load_catalog;
use super::regions::DerivedRegions;
use super::state::{apply_document_language, StorefrontContext};

/// Public catalog page
#[component]
pub fn StorefrontPage() -> impl IntoView {
    let ctx = StorefrontContext::new();
    provide_context(ctx);
    apply_document_language(ctx.language());
    ctx.init_render_debounce();

    spawn_local(load_catalog(ctx));

    view! {
        <div class="storefront">
            <StoreHeader />
            <main>
                <HeroSection />
                <AboutSection />
                <DerivedRegions />
                <CatalogSection />
                <ContactSection />
            </main>
            <StoreFooter />
        </div>
    }
}
