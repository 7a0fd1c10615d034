use contracts::enums::Language;
use contracts::shared::catalog::region_header;
use contracts::shared::i18n::t;
use contracts::shared::validation::{ContactField, ContactForm, FieldError, INVALID_EMAIL};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::use_storefront;

/// How long the demo confirmation stays visible
const SENT_NOTICE_MS: u32 = 4_000;

fn error_text(errors: &[FieldError], field: ContactField, lang: Language) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| {
        if e.message == INVALID_EMAIL {
            t("contact.invalidEmail", lang)
        } else {
            t("contact.required", lang)
        }
    })
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_storefront();
    let lang = move || ctx.language();

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let sent = RwSignal::new(false);
    let header = Memo::new(move |_| {
        let lang = lang();
        ctx.catalog.with(|c| region_header(c, "contact", "contact.title", None, lang))
    });

    let field_error = move |field: ContactField| {
        let lang = lang();
        errors.with(|e| error_text(e, field, lang))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let found = form.with(|f| f.validate());
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        errors.set(Vec::new());
        form.set(ContactForm::default());
        sent.set(true);
        log::info!("Contact form submitted");
        spawn_local(async move {
            TimeoutFuture::new(SENT_NOTICE_MS).await;
            let _ = sent.try_set(false);
        });
    };

    view! {
        <section id="contact" class="contact">
            <h2>{move || header.with(|h| h.title.clone())}</h2>
            {move || header.with(|h| {
                (!h.intro.is_empty()).then(|| view! { <p class="contact__intro">{h.intro.clone()}</p> })
            })}
            <form class="contact__form" novalidate=true on:submit=on_submit>
                <div class="form__group">
                    <label for="contact-name">{move || t("contact.name", lang())}</label>
                    <input
                        id="contact-name"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {move || field_error(ContactField::Name).map(|msg| view! {
                        <span class="form__error">{msg}</span>
                    })}
                </div>
                <div class="form__group">
                    <label for="contact-email">{move || t("contact.email", lang())}</label>
                    <input
                        id="contact-email"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    {move || field_error(ContactField::Email).map(|msg| view! {
                        <span class="form__error">{msg}</span>
                    })}
                </div>
                <div class="form__group">
                    <label for="contact-message">{move || t("contact.message", lang())}</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    {move || field_error(ContactField::Message).map(|msg| view! {
                        <span class="form__error">{msg}</span>
                    })}
                </div>
                <button type="submit" class="button button--primary">
                    {move || t("contact.send", lang())}
                </button>
                <Show when=move || sent.get()>
                    <p class="contact__status" role="status">{move || t("contact.sent", lang())}</p>
                </Show>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text_is_localized() {
        let errors = ContactForm {
            name: String::new(),
            email: "not-an-email".into(),
            message: "Hello".into(),
        }
        .validate();

        assert_eq!(
            error_text(&errors, ContactField::Name, Language::En),
            Some("Required")
        );
        assert_eq!(
            error_text(&errors, ContactField::Email, Language::En),
            Some("Invalid email")
        );
        assert_eq!(error_text(&errors, ContactField::Message, Language::En), None);
    }
}
