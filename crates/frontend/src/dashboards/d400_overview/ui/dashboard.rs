use crate::dashboards::d400_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, StatCard, PAGE_CAT_DASHBOARD};
use contracts::shared::dashboard::{DashboardStats, StatusCheck};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const QUICK_LINKS: [&str; 4] = [
    "a003_product",
    "a002_subcategory",
    "a004_section",
    "u502_media_library",
];

/// Counters, backend health and quick links of the admin panel
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stats = RwSignal::new(None::<DashboardStats>);
    let checks = RwSignal::new(Vec::<StatusCheck>::new());
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let configured = config().is_configured();

    let load_data = move || {
        if !configured {
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let (fetched, status) = futures::join!(api::fetch_stats(), api::run_status_checks());
            match fetched {
                Ok(s) => stats.set(Some(s)),
                Err(e) => {
                    log::error!("Failed to load dashboard stats: {}", e);
                    set_error.set(Some(e));
                }
            }
            checks.set(status);
            set_loading.set(false);
        });
    };

    // First visit seeds the hero and about rows the storefront expects
    if configured {
        spawn_local(async move {
            match api::ensure_default_sections().await {
                Ok(0) => {}
                Ok(created) => {
                    set_notice.set(Some(format!("Created {} default section(s)", created)));
                    load_data();
                }
                Err(e) => log::warn!("Could not create default sections: {}", e),
            }
        });
    }

    load_data();

    let stat = move |pick: fn(&DashboardStats) -> usize| Signal::derive(move || stats.get().map(|s| pick(&s)));

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get() || !configured)
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {(!configured).then(|| view! {
                    <div class="alert alert--warning">
                        "Backend not configured. The storefront shows its built-in catalog and changes here cannot be saved."
                    </div>
                })}
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

                <div class="stat-grid">
                    <StatCard label="Products" icon_name="products" value=stat(|s| s.total_products) />
                    <StatCard label="Active products" icon_name="check" value=stat(|s| s.active_products) />
                    <StatCard label="Featured" icon_name="image" value=stat(|s| s.featured_products) />
                    <StatCard label="Subcategories" icon_name="folder" value=stat(|s| s.total_subcategories) />
                    <StatCard label="Active subcategories" icon_name="folder" value=stat(|s| s.active_subcategories) />
                    <StatCard label="Sections" icon_name="sections" value=stat(|s| s.total_sections) />
                    <StatCard label="Main categories" icon_name="layers" value=stat(|s| s.total_main_categories) />
                </div>

                <h2 class="section-title">"Backend status"</h2>
                <ul class="status-list">
                    <For
                        each=move || checks.get()
                        key=|c| format!("{}:{}", c.name, c.label())
                        children=move |check: StatusCheck| {
                            let ok = check.is_ok();
                            view! {
                                <li class="status-list__item" class:status-list__item--error=!ok>
                                    {if ok { icon("check") } else { icon("alert") }}
                                    <span class="status-list__name">{check.name.clone()}</span>
                                    <span class="status-list__label">{check.label()}</span>
                                </li>
                            }
                        }
                    />
                </ul>

                <h2 class="section-title">"Quick links"</h2>
                <Flex gap=FlexGap::Small>
                    {QUICK_LINKS
                        .into_iter()
                        .map(|key| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| ctx.open_tab(key, tab_label_for_key(key))
                            >
                                {tab_label_for_key(key)}
                            </Button>
                        })
                        .collect_view()}
                </Flex>
            </div>
        </PageFrame>
    }
}
