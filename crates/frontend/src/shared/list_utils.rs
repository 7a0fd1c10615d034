/// Search input and match highlighting shared by the storefront and admin lists
use contracts::shared::catalog::{highlight_segments, TextSegment};
use contracts::shared::generation::{Debouncer, Generation};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Quiet period before a typed search applies
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Renders already-split segments, wrapping matches in `<mark>`
pub fn render_segments(segments: Vec<TextSegment>) -> AnyView {
    let parts: Vec<AnyView> = segments
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                view! { <mark class="search-highlight">{segment.text}</mark> }.into_any()
            } else {
                view! { <span>{segment.text}</span> }.into_any()
            }
        })
        .collect();
    view! { <>{parts}</> }.into_any()
}

/// Browser confirmation before deleting `what`; false when dismissed
pub fn confirm_delete(what: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&format!("Delete {}? This cannot be undone.", what)).ok())
        .unwrap_or(false)
}

/// Case-insensitive highlight of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    render_segments(highlight_segments(text, filter))
}

/// Search box with cancel-and-restart debounce and a clear button.
///
/// Every keystroke takes a new ticket; when the quiet period ends only the
/// latest ticket reaches `on_change`.
#[component]
pub fn SearchInput(
    /// Applied filter (drives the active styling)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced text
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Signal<String>,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debouncer = StoredValue::new(Debouncer::<String>::new());

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let mut ticket = Generation::default();
        debouncer.update_value(|d| ticket = d.schedule(new_value));

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            let fired = debouncer.try_update_value(|d| d.fire(ticket)).flatten();
            if let Some(text) = fired {
                on_change.run(text);
            }
        });
    };

    let clear_filter = move |_| {
        debouncer.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();
    let class = if class.is_empty() {
        "search-input".to_string()
    } else {
        format!("search-input {}", class)
    };

    view! {
        <div class=class class:search-input--active=is_filter_active>
            <input
                type="search"
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    type="button"
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}
