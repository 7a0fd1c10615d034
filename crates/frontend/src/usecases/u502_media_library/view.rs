use super::api::{self, folder_by_name, FOLDERS};
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::image::picked_file;
use crate::shared::list_utils::confirm_delete;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::shared::media::{format_file_size, StorageObject};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Browse, upload and delete images in the storage bucket
#[component]
pub fn MediaLibraryPage() -> impl IntoView {
    let folder_name = RwSignal::new(FOLDERS[0].as_str().to_string());
    let objects = RwSignal::new(Vec::<StorageObject>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (uploading, set_uploading) = signal(false);

    let load_data = move || {
        let folder = folder_by_name(&folder_name.get_untracked());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list_folder(folder).await {
                Ok(list) => objects.set(list),
                Err(e) => {
                    log::error!("Failed to list {}: {}", folder.as_str(), e);
                    objects.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        folder_name.track();
        load_data();
    });

    let on_upload = move |ev: leptos::ev::Event| {
        let Some(file) = picked_file(&ev) else { return };
        let folder = folder_by_name(&folder_name.get_untracked());
        set_uploading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::upload(&file, folder).await {
                Ok(url) => {
                    log::info!("Uploaded {}", url);
                    load_data();
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_uploading.set(false);
        });
    };

    let delete_object = move |name: String| {
        if !confirm_delete(&format!("image '{}'", name)) {
            return;
        }
        let folder = folder_by_name(&folder_name.get_untracked());
        spawn_local(async move {
            match api::remove(folder, &name).await {
                Ok(()) => objects.update(|list| list.retain(|o| o.name != name)),
                Err(e) => {
                    log::error!("Failed to delete {}: {}", name, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="u502_media_library--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Media library"</h1>
                    <Badge>{move || objects.with(|o| o.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Select value=folder_name>
                        {FOLDERS
                            .into_iter()
                            .map(|f| view! { <option value=f.as_str()>{f.as_str()}</option> })
                            .collect_view()}
                    </Select>
                    <label class="image-upload__button" class:image-upload__button--busy=move || uploading.get()>
                        {icon("upload")}
                        {move || if uploading.get() { " Uploading..." } else { " Upload" }}
                        <input
                            type="file"
                            accept="image/*"
                            style="display: none;"
                            prop:disabled=move || uploading.get()
                            on:change=on_upload
                        />
                    </label>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || !loading.get() && objects.with(|o| o.is_empty())>
                    <p class="page__hint">"No images in this folder."</p>
                </Show>

                <div class="media-grid">
                    <For
                        each=move || objects.get()
                        key=|o| o.name.clone()
                        children=move |object: StorageObject| {
                            let folder = folder_by_name(&folder_name.get_untracked());
                            let url = api::public_url(folder, &object.name);
                            let href = url.clone();
                            let name = object.name.clone();
                            view! {
                                <div class="media-card">
                                    <a href=href target="_blank" rel="noopener">
                                        <img class="media-card__image" src=url alt=object.name.clone() loading="lazy" />
                                    </a>
                                    <div class="media-card__name" title=object.name.clone()>{object.name.clone()}</div>
                                    <div class="media-card__meta">
                                        {format_file_size(object.size())}
                                        " · "
                                        {format_optional(object.created_at.as_deref())}
                                    </div>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| delete_object(name.clone())
                                        attr:title="Delete"
                                    >
                                        {icon("trash")}
                                    </Button>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </PageFrame>
    }
}
