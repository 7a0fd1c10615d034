use crate::app_shell::AdminShell;
use crate::layout::global_context::is_admin_location;
use crate::storefront::StorefrontPage;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

/// Storefront by default; the admin panel under `?view=admin` or `#admin`
#[component]
pub fn App() -> impl IntoView {
    let admin = is_admin_location();
    log::info!("Starting {}", if admin { "admin panel" } else { "storefront" });

    view! {
        <AuthProvider>
            {move || if admin {
                view! { <AdminShell /> }.into_any()
            } else {
                view! { <StorefrontPage /> }.into_any()
            }}
        </AuthProvider>
    }
}
