//! Image upload rules and storage object helpers

use serde::{Deserialize, Serialize};

pub const STORAGE_BUCKET: &str = "karamlebnanbucket";
pub const MAX_IMAGE_SIZE: u64 = 4 * 1024 * 1024;
pub const MAX_DIMENSION: u32 = 1200;
pub const JPEG_QUALITY: f64 = 0.8;
pub const UPLOAD_MIME: &str = "image/jpeg";

/// Folder of an upload inside the bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadFolder {
    Products,
    Banners,
    Sections,
    Uploads,
}

impl UploadFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFolder::Products => "products",
            UploadFolder::Banners => "banners",
            UploadFolder::Sections => "sections",
            UploadFolder::Uploads => "uploads",
        }
    }
}

/// Checks the picked file before anything is read or sent
pub fn validate_upload(mime: &str, size: u64) -> Result<(), String> {
    if !mime.starts_with("image/") {
        return Err("Please select an image file".into());
    }
    if size > MAX_IMAGE_SIZE {
        return Err("Image file is too large. Maximum size is 4MB".into());
    }
    Ok(())
}

/// Scales `(width, height)` to fit the max box, keeping aspect ratio; never upscales
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let ratio = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);
    (
        ((width as f64 * ratio).round() as u32).max(1),
        ((height as f64 * ratio).round() as u32).max(1),
    )
}

/// Lower-cased extension of the original file name, `jpg` when it has none
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => "jpg".to_string(),
    }
}

/// Base-36 rendering of `value`
pub fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// `<folder>/<timestamp_ms>_<random base36>.<ext>`
pub fn upload_object_name(folder: UploadFolder, original_name: &str, timestamp_ms: i64, random: u128) -> String {
    let random = to_base36(random);
    let random: String = random.chars().take(13).collect();
    format!(
        "{}/{}_{}.{}",
        folder.as_str(),
        timestamp_ms,
        random,
        file_extension(original_name)
    )
}

/// Human readable size: `0 Bytes`, `1.5 KB`, `2 MB`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let k = 1024f64;
    let bytes_f = bytes as f64;
    let i = ((bytes_f.ln() / k.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes_f / k.powi(i as i32);
    let mut text = format!("{:.2}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[i])
}

/// Object listed in the media screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageObject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metadata: Option<StorageObjectMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageObjectMetadata {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mimetype: Option<String>,
}

impl StorageObject {
    pub fn size(&self) -> u64 {
        self.metadata.as_ref().map(|m| m.size).unwrap_or(0)
    }

    /// Folder placeholders have no id
    pub fn is_file(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_upload() {
        assert!(validate_upload("image/png", 1024).is_ok());
        assert_eq!(
            validate_upload("application/pdf", 10),
            Err("Please select an image file".to_string())
        );
        assert!(validate_upload("image/jpeg", MAX_IMAGE_SIZE).is_ok());
        assert!(validate_upload("image/jpeg", MAX_IMAGE_SIZE + 1).is_err());
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(2400, 1200, 1200, 1200), (1200, 600));
        assert_eq!(fit_within(1000, 3000, 1200, 1200), (400, 1200));
        assert_eq!(fit_within(800, 600, 1200, 1200), (800, 600));
    }

    #[test]
    fn test_upload_object_name() {
        let name = upload_object_name(UploadFolder::Products, "Fig-Jam.PNG", 1_723_700_000_000, 35);
        assert_eq!(name, "products/1723700000000_z.png");
        assert_eq!(
            upload_object_name(UploadFolder::Banners, "banner", 1, 36),
            "banners/1_10.jpg"
        );
    }

    #[test]
    fn test_random_part_is_capped() {
        let name = upload_object_name(UploadFolder::Uploads, "a.jpg", 1, u128::MAX);
        let random = name
            .trim_start_matches("uploads/1_")
            .trim_end_matches(".jpg");
        assert_eq!(random.len(), 13);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }
}
