//! Image upload pipeline and the fallback-aware `<img>`

use contracts::shared::catalog::{ImageFallback, FALLBACK_IMAGE};
use contracts::shared::media::{
    fit_within, upload_object_name, validate_upload, UploadFolder, JPEG_QUALITY, MAX_DIMENSION,
    UPLOAD_MIME,
};
use leptos::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement, Url};

use crate::shared::supabase;

async fn load_image(url: &str) -> Result<HtmlImageElement, String> {
    let img = HtmlImageElement::new().map_err(|e| format!("Failed to create image: {:?}", e))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to read the image file".to_string())?;
    Ok(img)
}

async fn canvas_to_jpeg(canvas: &HtmlCanvasElement) -> Result<Blob, String> {
    let mut encode_error: Option<String> = None;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let callback = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if let Err(e) = canvas.to_blob_with_type_and_encoder_options(
            callback.unchecked_ref(),
            UPLOAD_MIME,
            &JsValue::from_f64(JPEG_QUALITY),
        ) {
            encode_error = Some(format!("Failed to encode image: {:?}", e));
        }
    });
    if let Some(e) = encode_error {
        return Err(e);
    }
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Failed to encode image: {:?}", e))?;
    value
        .dyn_into::<Blob>()
        .map_err(|_| "Failed to encode image".to_string())
}

/// Downscales `file` to fit the max box and re-encodes it as JPEG
pub async fn compress_image(file: &File) -> Result<Blob, String> {
    let url = Url::create_object_url_with_blob(file)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    let loaded = load_image(&url).await;
    let _ = Url::revoke_object_url(&url);
    let img = loaded?;

    let (width, height) = fit_within(
        img.natural_width(),
        img.natural_height(),
        MAX_DIMENSION,
        MAX_DIMENSION,
    );

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| format!("Failed to create canvas: {:?}", e))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|e| format!("Failed to cast to canvas: {:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .map_err(|e| format!("Failed to get canvas context: {:?}", e))?
        .ok_or("Canvas 2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| format!("Failed to cast canvas context: {:?}", e))?;
    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &img,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )
        .map_err(|e| format!("Failed to draw image: {:?}", e))?;

    canvas_to_jpeg(&canvas).await
}

fn random_suffix() -> u128 {
    let high = (js_sys::Math::random() * 4_503_599_627_370_496.0) as u128;
    let low = (js_sys::Math::random() * 4_503_599_627_370_496.0) as u128;
    (high << 52) | low
}

/// Validates, compresses and uploads `file`; returns its public URL
pub async fn upload_image(file: &File, folder: UploadFolder) -> Result<String, String> {
    validate_upload(&file.type_(), file.size() as u64)?;
    let blob = compress_image(file).await?;
    let path = upload_object_name(
        folder,
        &file.name(),
        js_sys::Date::now() as i64,
        random_suffix(),
    );
    log::info!("Uploading {} ({} bytes)", path, blob.size() as u64);
    supabase::upload(&path, &blob, UPLOAD_MIME).await
}

/// First file picked in an `<input type="file">`
pub fn picked_file(ev: &leptos::ev::Event) -> Option<File> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// `<img>` that swaps to the placeholder once if its source fails to load
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] fallback: Option<String>,
) -> impl IntoView {
    let fallback = fallback.unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let state = RwSignal::new(ImageFallback::with_fallback(&src, &fallback));

    view! {
        <img
            class=class
            alt=alt
            loading="lazy"
            src=move || state.with(|s| s.current().to_string())
            on:error=move |_| {
                state.update(|s| {
                    if s.on_error().is_some() {
                        log::debug!("Image failed to load, using placeholder");
                    }
                });
            }
        />
    }
}

/// URL field with a preview and an upload button.
///
/// A picked file is validated, compressed and uploaded; on success its
/// public URL replaces `value`. `uploading` lets the form block saving.
#[component]
pub fn ImageUploadField(
    value: RwSignal<String>,
    folder: UploadFolder,
    #[prop(optional)] uploading: Option<RwSignal<bool>>,
) -> impl IntoView {
    let busy = uploading.unwrap_or_else(|| RwSignal::new(false));
    let (error, set_error) = signal::<Option<String>>(None);

    let on_pick = move |ev: leptos::ev::Event| {
        let Some(file) = picked_file(&ev) else { return };
        busy.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match upload_image(&file, folder).await {
                Ok(url) => value.set(url),
                Err(e) => {
                    log::error!("Image upload failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="image-upload">
            {move || {
                let src = value.get();
                (!src.trim().is_empty()).then(|| view! {
                    <img class="image-upload__preview" src=src alt="Preview" />
                })
            }}
            <thaw::Input value=value placeholder="https://..." />
            <label class="image-upload__button" class:image-upload__button--busy=move || busy.get()>
                {crate::shared::icons::icon("upload")}
                {move || if busy.get() { " Uploading..." } else { " Upload image" }}
                <input
                    type="file"
                    accept="image/*"
                    style="display: none;"
                    prop:disabled=move || busy.get()
                    on:change=on_pick
                />
            </label>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        </div>
    }
}
