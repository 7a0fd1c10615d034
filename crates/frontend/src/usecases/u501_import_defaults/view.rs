use super::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::shared::sample_data::default_subcategories;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Seeds the subcategory table with the built-in list
#[component]
pub fn ImportDefaultsPage() -> impl IntoView {
    let defaults: Vec<Subcategory> = default_subcategories();
    let existing = RwSignal::new(Vec::<String>::new());
    let (is_running, set_is_running) = signal(false);
    let (result, set_result) = signal(None::<Result<String, String>>);

    let refresh_existing = move || {
        spawn_local(async move {
            match api::fetch_existing_slugs().await {
                Ok(slugs) => existing.set(slugs),
                Err(e) => log::warn!("Existing subcategories unavailable: {}", e),
            }
        });
    };
    refresh_existing();

    let run_import = move |_| {
        set_is_running.set(true);
        set_result.set(None);
        spawn_local(async move {
            let outcome = api::import_defaults().await.and_then(|report| {
                if report.failed > 0 {
                    Err(report.summary())
                } else {
                    Ok(report.summary())
                }
            });
            set_result.set(Some(outcome));
            set_is_running.set(false);
            refresh_existing();
        });
    };

    let total = defaults.len();
    let rows = defaults;

    view! {
        <PageFrame page_id="u501_import_defaults--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Import default subcategories"</h1>
                    <Badge>{total.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=run_import
                        disabled=Signal::derive(move || is_running.get())
                    >
                        {icon("import")}
                        {move || if is_running.get() { " Importing..." } else { " Import" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <p class="page__hint">
                    "Existing rows with the same slug are updated; nothing is deleted."
                </p>
                {move || result.get().map(|r| match r {
                    Ok(text) => view! { <div class="alert alert--success">{text}</div> }.into_any(),
                    Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=140.0>"Slug"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Title (EN)"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Title (AR)"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"State"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let slug = row.slug.clone();
                                    let exists = move || existing.with(|e| e.contains(&slug));
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout><code>{row.slug.clone()}</code></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.category_type.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.title_en.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span dir="rtl">{row.title_ar.clone().unwrap_or_default()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || if exists() {
                                                        view! { <span class="badge badge--neutral">"Exists"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--success">"New"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
