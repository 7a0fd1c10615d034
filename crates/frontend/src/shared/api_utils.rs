//! URL and error helpers for the hosted backend
//!
//! Everything here is pure string work so it can be tested natively; the
//! request plumbing lives in `shared::supabase`.

pub const CLIENT_INFO: &str = "karam-libnan-admin";

/// Query against one REST table
///
/// ```rust
/// use frontend::shared::api_utils::RestQuery;
///
/// let url = RestQuery::table("products")
///     .select("*,product_sections(section_key)")
///     .eq("active", "true")
///     .order("sort_order", true)
///     .url("https://demo.supabase.co");
/// assert!(url.starts_with("https://demo.supabase.co/rest/v1/products?select="));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestQuery {
    table: String,
    params: Vec<(String, String)>,
    orders: Vec<String>,
}

impl RestQuery {
    pub fn table(name: &str) -> Self {
        Self {
            table: name.to_string(),
            ..Default::default()
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    /// `column=eq.value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.into(), format!("eq.{}", value)));
        self
    }

    /// Ascending orders put nulls last so unordered rows trail
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc.nullslast" } else { "desc.nullslast" };
        self.orders.push(format!("{}.{}", column, direction));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".into(), count.to_string()));
        self
    }

    /// Case-insensitive substring match on any of `columns`; blank terms add nothing
    pub fn search(mut self, columns: &[&str], term: &str) -> Self {
        let term = sanitize_search_term(term);
        if term.is_empty() || columns.is_empty() {
            return self;
        }
        let clauses: Vec<String> = columns
            .iter()
            .map(|c| format!("{}.ilike.*{}*", c, term))
            .collect();
        self.params
            .push(("or".into(), format!("({})", clauses.join(","))));
        self
    }

    pub fn on_conflict(mut self, column: &str) -> Self {
        self.params.push(("on_conflict".into(), column.into()));
        self
    }

    pub fn url(&self, base: &str) -> String {
        let mut pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        if !self.orders.is_empty() {
            pairs.push(format!("order={}", urlencoding::encode(&self.orders.join(","))));
        }
        let mut url = format!("{}/rest/v1/{}", base.trim_end_matches('/'), self.table);
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }
}

/// Drops the characters PostgREST treats as filter syntax
pub fn sanitize_search_term(term: &str) -> String {
    term.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '(' | ')' | '*' | '"' | '\\'))
        .collect()
}

/// Object path with every segment percent-encoded
pub fn encode_object_path(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn storage_object_url(base: &str, bucket: &str, path: &str) -> String {
    format!(
        "{}/storage/v1/object/{}/{}",
        base.trim_end_matches('/'),
        bucket,
        encode_object_path(path)
    )
}

/// Address the storefront and the media screen render
pub fn storage_public_url(base: &str, bucket: &str, path: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        base.trim_end_matches('/'),
        bucket,
        encode_object_path(path)
    )
}

pub fn storage_list_url(base: &str, bucket: &str) -> String {
    format!("{}/storage/v1/object/list/{}", base.trim_end_matches('/'), bucket)
}

pub fn storage_bucket_url(base: &str, bucket: &str) -> String {
    format!("{}/storage/v1/object/{}", base.trim_end_matches('/'), bucket)
}

pub fn auth_url(base: &str, path: &str) -> String {
    format!("{}/auth/v1/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Message shown for a failed response: the backend's own text when it sent one
pub fn decode_error(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error_description", "msg", "error"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    }
    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        format!("Request failed: {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_eq_order() {
        let url = RestQuery::table("subcategories")
            .select("*")
            .eq("active", "true")
            .order("sort_order", true)
            .url("https://demo.supabase.co/");
        assert_eq!(
            url,
            "https://demo.supabase.co/rest/v1/subcategories?select=%2A&active=eq.true&order=sort_order.asc.nullslast"
        );
    }

    #[test]
    fn test_search_builds_or_filter() {
        let url = RestQuery::table("products")
            .search(&["name_en", "name_ar"], " oli ")
            .url("https://x");
        assert_eq!(
            url,
            "https://x/rest/v1/products?or=%28name_en.ilike.%2Aoli%2A%2Cname_ar.ilike.%2Aoli%2A%29"
        );
    }

    #[test]
    fn test_blank_search_adds_nothing() {
        let url = RestQuery::table("products").search(&["name_en"], " (,) ").url("https://x");
        assert_eq!(url, "https://x/rest/v1/products");
    }

    #[test]
    fn test_multiple_orders_joined() {
        let url = RestQuery::table("products")
            .order("sort_order", true)
            .order("name_en", true)
            .url("https://x");
        assert!(url.ends_with("order=sort_order.asc.nullslast%2Cname_en.asc.nullslast"));
    }

    #[test]
    fn test_storage_urls() {
        assert_eq!(
            storage_public_url("https://x", "karamlebnanbucket", "products/1_a b.jpg"),
            "https://x/storage/v1/object/public/karamlebnanbucket/products/1_a%20b.jpg"
        );
        assert_eq!(
            storage_list_url("https://x/", "b"),
            "https://x/storage/v1/object/list/b"
        );
        assert_eq!(
            auth_url("https://x", "/token?grant_type=password"),
            "https://x/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn test_decode_error_fields() {
        assert_eq!(
            decode_error(400, r#"{"code":"23505","message":"duplicate key value"}"#),
            "duplicate key value"
        );
        assert_eq!(
            decode_error(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(decode_error(404, r#"{"statusCode":"404"}"#), "Request failed: 404");
        assert_eq!(decode_error(502, ""), "Request failed: 502");
        assert_eq!(decode_error(500, "upstream timeout"), "upstream timeout");
    }
}
