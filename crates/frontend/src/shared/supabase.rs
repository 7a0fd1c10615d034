//! Thin client for the hosted backend: REST tables, the storage bucket and
//! password auth. Every call returns `Result<_, String>` with the backend's
//! own error text passed through.

use contracts::domain::common::TableRow;
use contracts::shared::media::StorageObject;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{
    auth_url, decode_error, storage_bucket_url, storage_list_url, storage_object_url,
    storage_public_url, RestQuery, CLIENT_INFO,
};
use crate::shared::config::{config, SupabaseConfig};
use crate::system::auth::storage as auth_storage;

const NOT_CONFIGURED: &str = "Backend is not configured";

fn configured() -> Result<&'static SupabaseConfig, String> {
    let cfg = config();
    if cfg.is_configured() {
        Ok(cfg)
    } else {
        Err(NOT_CONFIGURED.to_string())
    }
}

/// Signed-in token when there is one, the anon key otherwise
fn bearer(cfg: &SupabaseConfig) -> String {
    auth_storage::get_access_token().unwrap_or_else(|| cfg.anon_key.clone())
}

fn with_headers(builder: RequestBuilder, cfg: &SupabaseConfig) -> RequestBuilder {
    builder
        .header("apikey", &cfg.anon_key)
        .header("Authorization", &format!("Bearer {}", bearer(cfg)))
        .header("X-Client-Info", CLIENT_INFO)
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(decode_error(status, &body))
}

async fn send(builder: RequestBuilder) -> Result<Response, String> {
    let response = builder
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await
}

async fn send_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> Result<Response, String> {
    let response = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await
}

// ============================================================================
// REST tables
// ============================================================================

/// Rows of `T`'s table matching `query`
pub async fn select<T>(query: RestQuery) -> Result<Vec<T>, String>
where
    T: TableRow + DeserializeOwned,
{
    let cfg = configured()?;
    let builder = with_headers(Request::get(&query.url(&cfg.url)), cfg);
    send(builder)
        .await?
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Every row of `T`'s table with its embedded joins
pub async fn fetch_all<T>(order_by: &str) -> Result<Vec<T>, String>
where
    T: TableRow + DeserializeOwned,
{
    select(
        RestQuery::table(T::table_name())
            .select(T::select_columns())
            .order(order_by, true),
    )
    .await
}

/// Active rows only, as the storefront loads them
pub async fn fetch_active<T>(order_by: &str) -> Result<Vec<T>, String>
where
    T: TableRow + DeserializeOwned,
{
    select(
        RestQuery::table(T::table_name())
            .select(T::select_columns())
            .eq("active", "true")
            .order(order_by, true),
    )
    .await
}

/// Fails with the backend message when the table cannot be read
pub async fn ping_table<T>() -> Result<(), String>
where
    T: TableRow + DeserializeOwned,
{
    let cfg = configured()?;
    let url = RestQuery::table(T::table_name())
        .select(T::key_column())
        .limit(1)
        .url(&cfg.url);
    send(with_headers(Request::get(&url), cfg)).await.map(|_| ())
}

pub async fn insert<T, B>(body: &B) -> Result<(), String>
where
    T: TableRow,
    B: Serialize + ?Sized,
{
    insert_into(T::table_name(), body).await
}

/// Insert into a table with no row type of its own (join tables)
pub async fn insert_into<B>(table: &str, body: &B) -> Result<(), String>
where
    B: Serialize + ?Sized,
{
    let cfg = configured()?;
    let url = RestQuery::table(table).url(&cfg.url);
    let builder = with_headers(Request::post(&url), cfg).header("Prefer", "return=minimal");
    send_json(builder, body).await.map(|_| ())
}

/// Insert-or-merge on the table's key column
pub async fn upsert<T, B>(body: &B) -> Result<(), String>
where
    T: TableRow,
    B: Serialize + ?Sized,
{
    let cfg = configured()?;
    let url = RestQuery::table(T::table_name())
        .on_conflict(T::key_column())
        .url(&cfg.url);
    let builder = with_headers(Request::post(&url), cfg)
        .header("Prefer", "resolution=merge-duplicates,return=minimal");
    send_json(builder, body).await.map(|_| ())
}

pub async fn update<T, B>(key: &str, body: &B) -> Result<(), String>
where
    T: TableRow,
    B: Serialize + ?Sized,
{
    let cfg = configured()?;
    let url = RestQuery::table(T::table_name())
        .eq(T::key_column(), key)
        .url(&cfg.url);
    let builder = with_headers(Request::patch(&url), cfg).header("Prefer", "return=minimal");
    send_json(builder, body).await.map(|_| ())
}

pub async fn delete<T>(key: &str) -> Result<(), String>
where
    T: TableRow,
{
    delete_where(T::table_name(), T::key_column(), key).await
}

pub async fn delete_where(table: &str, column: &str, value: &str) -> Result<(), String> {
    let cfg = configured()?;
    let url = RestQuery::table(table).eq(column, value).url(&cfg.url);
    send(with_headers(Request::delete(&url), cfg)).await.map(|_| ())
}

// ============================================================================
// Storage bucket
// ============================================================================

/// Public address of an object; works without a configured anon key
pub fn public_url(path: &str) -> String {
    let cfg = config();
    storage_public_url(&cfg.url, &cfg.bucket, path)
}

/// Uploads `blob` under `path` and returns its public URL
pub async fn upload(path: &str, blob: &web_sys::Blob, content_type: &str) -> Result<String, String> {
    let cfg = configured()?;
    let url = storage_object_url(&cfg.url, &cfg.bucket, path);
    let request = with_headers(Request::post(&url), cfg)
        .header("Content-Type", content_type)
        .header("cache-control", "3600")
        .body(blob.clone())
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await?;
    Ok(public_url(path))
}

#[derive(Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: usize,
    offset: usize,
    #[serde(rename = "sortBy")]
    sort_by: SortBy,
}

#[derive(Serialize)]
struct SortBy {
    column: &'static str,
    order: &'static str,
}

/// Objects directly under `prefix` ("" for the bucket root)
pub async fn list(prefix: &str, limit: usize) -> Result<Vec<StorageObject>, String> {
    let cfg = configured()?;
    let body = ListRequest {
        prefix,
        limit,
        offset: 0,
        sort_by: SortBy {
            column: "name",
            order: "asc",
        },
    };
    let builder = with_headers(Request::post(&storage_list_url(&cfg.url, &cfg.bucket)), cfg);
    send_json(builder, &body)
        .await?
        .json::<Vec<StorageObject>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[derive(Serialize)]
struct RemoveRequest<'a> {
    prefixes: Vec<&'a str>,
}

pub async fn remove(path: &str) -> Result<(), String> {
    let cfg = configured()?;
    let builder = with_headers(Request::delete(&storage_bucket_url(&cfg.url, &cfg.bucket)), cfg);
    send_json(builder, &RemoveRequest { prefixes: vec![path] })
        .await
        .map(|_| ())
}

// ============================================================================
// Auth
// ============================================================================

/// POST to an auth endpoint and parse the reply
pub async fn auth_post<B, R>(path: &str, body: &B) -> Result<R, String>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let cfg = configured()?;
    let builder = with_headers(Request::post(&auth_url(&cfg.url, path)), cfg);
    send_json(builder, body)
        .await?
        .json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revokes `access_token` on the backend
pub async fn auth_logout(access_token: &str) -> Result<(), String> {
    let cfg = configured()?;
    let builder = Request::post(&auth_url(&cfg.url, "logout"))
        .header("apikey", &cfg.anon_key)
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("X-Client-Info", CLIENT_INFO);
    send(builder).await.map(|_| ())
}
