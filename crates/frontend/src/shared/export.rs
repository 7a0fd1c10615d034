/// Download of table rows as pretty-printed JSON files
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const PRODUCTS_EXPORT_FILE: &str = "karam-libnan-products.json";
pub const SUBCATEGORIES_EXPORT_FILE: &str = "karam-libnan-subcategories.json";

/// Pretty JSON of `rows`; an empty list is refused
pub fn to_pretty_json<T: Serialize>(rows: &[T]) -> Result<String, String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }
    serde_json::to_string_pretty(rows).map_err(|e| format!("Failed to serialize export: {}", e))
}

/// Serializes `rows` and starts the browser download
pub fn export_to_json<T: Serialize>(rows: &[T], filename: &str) -> Result<(), String> {
    let content = to_pretty_json(rows)?;
    let blob = create_json_blob(&content)?;
    download_blob(&blob, filename)
}

fn create_json_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/json;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Clicks a hidden anchor pointing at an object URL for `blob`
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_subcategory::aggregate::Subcategory;

    #[test]
    fn test_empty_export_refused() {
        let rows: Vec<Subcategory> = Vec::new();
        assert_eq!(to_pretty_json(&rows), Err("Nothing to export".to_string()));
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let rows = vec![Subcategory::new("olives", "single", "Olives", "زيتون", 1)];
        let json = to_pretty_json(&rows).unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\"slug\": \"olives\""));
    }
}
