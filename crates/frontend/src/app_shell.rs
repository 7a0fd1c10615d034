//! Admin root
//!
//! - `AdminShell` - auth gate (login page or the main layout)
//! - `MainLayout` - Shell with the sidebar and the tabbed screens

use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

/// Opens the `?active=` tab (or the dashboard) and keeps the URL in sync
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn AdminShell() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
