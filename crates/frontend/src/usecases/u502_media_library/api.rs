use contracts::shared::media::{StorageObject, UploadFolder};
use web_sys::File;

use crate::shared::image::upload_image;
use crate::shared::supabase;

pub const FOLDERS: [UploadFolder; 4] = [
    UploadFolder::Products,
    UploadFolder::Banners,
    UploadFolder::Sections,
    UploadFolder::Uploads,
];

const LIST_LIMIT: usize = 100;

pub fn folder_by_name(name: &str) -> UploadFolder {
    FOLDERS
        .into_iter()
        .find(|f| f.as_str() == name)
        .unwrap_or(UploadFolder::Uploads)
}

/// Bucket path of an object listed under `folder`
pub fn object_path(folder: UploadFolder, name: &str) -> String {
    format!("{}/{}", folder.as_str(), name)
}

/// Files of `folder` sorted by name; folder placeholders are skipped
pub async fn list_folder(folder: UploadFolder) -> Result<Vec<StorageObject>, String> {
    let objects = supabase::list(folder.as_str(), LIST_LIMIT).await?;
    Ok(objects.into_iter().filter(StorageObject::is_file).collect())
}

pub async fn upload(file: &File, folder: UploadFolder) -> Result<String, String> {
    upload_image(file, folder).await
}

pub async fn remove(folder: UploadFolder, name: &str) -> Result<(), String> {
    supabase::remove(&object_path(folder, name)).await
}

pub fn public_url(folder: UploadFolder, name: &str) -> String {
    supabase::public_url(&object_path(folder, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_lookup_and_paths() {
        assert_eq!(folder_by_name("banners"), UploadFolder::Banners);
        assert_eq!(folder_by_name("unknown"), UploadFolder::Uploads);
        assert_eq!(object_path(UploadFolder::Products, "a.jpg"), "products/a.jpg");
    }
}
