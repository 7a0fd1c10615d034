//! Deserializers for the loosely typed columns the backend returns

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Accepts numeric (`bigint`, sample data) and textual (`uuid`) ids
pub fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Splits comma separated form input into trimmed, non-empty items
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_list`] for filling form inputs
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Parses an optional integer form field; blank means `None`
pub fn parse_optional_i32(input: &str, field: &str) -> Result<Option<i32>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| format!("{} must be a whole number", field))
}

/// Blank form text becomes `None`
pub fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "flexible_id")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_flexible_id_and_null_lists() {
        let row: Row = serde_json::from_str(r#"{"id": 42, "tags": null}"#).unwrap();
        assert_eq!(row.id, "42");
        assert!(row.tags.is_empty());

        let row: Row = serde_json::from_str(r#"{"id": "9f1c"}"#).unwrap();
        assert_eq!(row.id, "9f1c");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" Figs, ,Sugar ,"), vec!["Figs", "Sugar"]);
        assert_eq!(join_list(&split_list("a,b")), "a, b");
    }

    #[test]
    fn test_parse_optional_i32() {
        assert_eq!(parse_optional_i32(" ", "Sort order"), Ok(None));
        assert_eq!(parse_optional_i32("7", "Sort order"), Ok(Some(7)));
        assert!(parse_optional_i32("x", "Sort order").is_err());
    }
}
