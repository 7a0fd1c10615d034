use super::api;
use crate::shared::export::{PRODUCTS_EXPORT_FILE, SUBCATEGORIES_EXPORT_FILE};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ExportKind {
    Products,
    Subcategories,
}

impl ExportKind {
    fn file_name(self) -> &'static str {
        match self {
            ExportKind::Products => PRODUCTS_EXPORT_FILE,
            ExportKind::Subcategories => SUBCATEGORIES_EXPORT_FILE,
        }
    }
}

#[component]
pub fn ExportJsonPage() -> impl IntoView {
    let running = RwSignal::new(None::<ExportKind>);
    let (result, set_result) = signal(None::<Result<String, String>>);

    let run = move |kind: ExportKind| {
        running.set(Some(kind));
        set_result.set(None);
        spawn_local(async move {
            let outcome = match kind {
                ExportKind::Products => api::export_products().await,
                ExportKind::Subcategories => api::export_subcategories().await,
            }
            .map(|count| format!("Exported {} row(s) to {}", count, kind.file_name()));
            if let Err(e) = &outcome {
                log::error!("Export to {} failed: {}", kind.file_name(), e);
            }
            set_result.set(Some(outcome));
            running.set(None);
        });
    };

    let busy = Signal::derive(move || running.get().is_some());

    view! {
        <PageFrame page_id="u503_export_json--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Export JSON"</h1>
                </div>
            </div>

            <div class="page__content">
                <p class="page__hint">"Downloads the current table contents as pretty-printed JSON."</p>
                {move || result.get().map(|r| match r {
                    Ok(text) => view! { <div class="alert alert--success">{text}</div> }.into_any(),
                    Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
                })}

                <Flex gap=FlexGap::Medium>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| run(ExportKind::Products)
                        disabled=busy
                    >
                        {icon("download")}
                        {move || if running.get() == Some(ExportKind::Products) { " Exporting..." } else { " Products" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| run(ExportKind::Subcategories)
                        disabled=busy
                    >
                        {icon("download")}
                        {move || if running.get() == Some(ExportKind::Subcategories) { " Exporting..." } else { " Subcategories" }}
                    </Button>
                </Flex>
            </div>
        </PageFrame>
    }
}
