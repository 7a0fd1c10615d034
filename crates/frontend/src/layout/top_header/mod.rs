//! Admin top bar: sidebar toggle, title, signed-in email and sign-out

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Karam Libnan Admin"</span>
            </div>

            {(!config().is_configured()).then(|| view! {
                <div class="top-header__warning">
                    {icon("alert")}
                    " Backend is not configured"
                </div>
            })}

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{move || auth_state.with(|s| s.email())}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
