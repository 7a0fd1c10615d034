use super::view_model::{subcategory_options, ProductDetailsViewModel};
use contracts::domain::a003_product::aggregate::ProductDto;
use contracts::shared::media::UploadFolder;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::image::ImageUploadField;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

type Getter = fn(&ProductDto) -> String;
type Setter = fn(&mut ProductDto, String);

/// Labelled `<input>` or `<textarea>` bound to one form field
fn text_field(
    vm: ProductDetailsViewModel,
    label: &'static str,
    get: Getter,
    set: Setter,
    rtl: bool,
    multiline: bool,
) -> impl IntoView {
    let dir = if rtl { "rtl" } else { "ltr" };
    let value = move || vm.form.with(get);
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        vm.form.update(|f| set(f, text));
    };
    let control = if multiline {
        view! { <textarea class="form__textarea" dir=dir prop:value=value on:input=on_input /> }.into_any()
    } else {
        view! { <input type="text" class="form__input" dir=dir prop:value=value on:input=on_input /> }.into_any()
    };
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {control}
        </div>
    }
}

#[component]
pub fn ProductDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load_if_needed(id);

    let options = Memo::new(move |_| {
        let (main_type, current) = vm.form.with(|f| (f.main_type.clone(), f.sub_slug.clone()));
        vm.subcategories.with(|all| subcategory_options(all, &main_type, &current))
    });

    view! {
        <PageFrame page_id="a003_product--detail" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Edit product" } else { "New product" }}
                    </h1>
                    {move || vm.loading.get().then(|| view! { <span class="page__hint">"Loading..."</span> })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=Signal::derive(move || !vm.can_save())
                    >
                        {icon("check")}
                        {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content details-form">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__row">
                    {text_field(vm, "Name (EN)", |f| f.name_en.clone(), |f, v| f.name_en = v, false, false)}
                    {text_field(vm, "Name (AR)", |f| f.name_ar.clone(), |f, v| f.name_ar = v, true, false)}
                </div>
                <div class="form__row">
                    {text_field(vm, "Description (EN)", |f| f.description_en.clone(), |f, v| f.description_en = v, false, true)}
                    {text_field(vm, "Description (AR)", |f| f.description_ar.clone(), |f, v| f.description_ar = v, true, true)}
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Main category"</label>
                        <select
                            class="form__select"
                            prop:value=move || vm.form.with(|f| f.main_type.clone())
                            on:change=move |ev| vm.set_main_type(event_target_value(&ev))
                        >
                            <option value="single">"Single"</option>
                            <option value="bulk">"Bulk"</option>
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Subcategory"</label>
                        <select
                            class="form__select"
                            prop:value=move || vm.form.with(|f| f.sub_slug.clone())
                            on:change=move |ev| {
                                let slug = event_target_value(&ev);
                                vm.form.update(|f| f.sub_slug = slug);
                            }
                        >
                            <option value="">"Choose..."</option>
                            {move || {
                                let selected = vm.form.with(|f| f.sub_slug.clone());
                                options
                                    .get()
                                    .into_iter()
                                    .map(|(slug, title)| {
                                        let is_selected = slug == selected;
                                        view! { <option value=slug.clone() selected=is_selected>{title}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    {text_field(vm, "Sort order", |f| f.sort_order.clone(), |f, v| f.sort_order = v, false, false)}
                </div>

                <div class="form__group">
                    <label class="form__label">"Image"</label>
                    <ImageUploadField
                        value=vm.image_url
                        folder=UploadFolder::Products
                        uploading=vm.uploading
                    />
                </div>

                <p class="page__hint">"Lists below are comma separated."</p>
                <div class="form__row">
                    {text_field(vm, "Ingredients (EN)", |f| f.ingredients_en.clone(), |f, v| f.ingredients_en = v, false, false)}
                    {text_field(vm, "Ingredients (AR)", |f| f.ingredients_ar.clone(), |f, v| f.ingredients_ar = v, true, false)}
                </div>
                <div class="form__row">
                    {text_field(vm, "Variants (EN)", |f| f.variants_en.clone(), |f, v| f.variants_en = v, false, false)}
                    {text_field(vm, "Variants (AR)", |f| f.variants_ar.clone(), |f, v| f.variants_ar = v, true, false)}
                </div>
                <div class="form__row">
                    {text_field(vm, "Tags (EN)", |f| f.tags_en.clone(), |f, v| f.tags_en = v, false, false)}
                    {text_field(vm, "Tags (AR)", |f| f.tags_ar.clone(), |f, v| f.tags_ar = v, true, false)}
                </div>
                {text_field(vm, "Section keys", |f| f.section_keys.clone(), |f, v| f.section_keys = v, false, false)}

                <div class="form__row">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.featured)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.form.update(|f| f.featured = checked);
                            }
                        />
                        " Featured"
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.active)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.form.update(|f| f.active = checked);
                            }
                        />
                        " Active"
                    </label>
                </div>
            </div>
        </PageFrame>
    }
}
