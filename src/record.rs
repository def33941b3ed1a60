//! Output record shapes.
//!
//! Each entry file produces two records: a compact [`IndexRecord`] for
//! listing/search, and a full record carrying every front-matter key plus
//! the raw body.

use crate::config::CHARTS_SUBDIR;
use crate::matter::JsonMap;
use serde::Serialize;
use serde_json::Value;

/// Compact per-entry summary emitted to `entries-index.json`.
///
/// Missing front-matter fields default rather than error: `id`, `layer`,
/// `categoryId` and `lastUpdated` fall back to `null`, `name` to the
/// filename, `tagIds` to an empty sequence. `hasContent` and
/// `hasTitledLinks` are derived, never read from front-matter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    pub path: String,
    pub id: Value,
    pub name: Value,
    pub layer: Value,
    pub category_id: Value,
    pub tag_ids: Value,
    pub last_updated: Value,
    pub has_content: bool,
    pub has_titled_links: bool,
}

impl IndexRecord {
    pub fn build(meta: &JsonMap, body: &str, chart_id: &str, filename: &str) -> Self {
        Self {
            path: entry_path(chart_id, filename),
            id: field(meta, "id"),
            name: present(meta, "name")
                .cloned()
                .unwrap_or_else(|| Value::String(filename.to_owned())),
            layer: field(meta, "layer"),
            category_id: field(meta, "categoryId"),
            tag_ids: present(meta, "tagIds")
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
            last_updated: field(meta, "lastUpdated"),
            has_content: !body.trim().is_empty(),
            has_titled_links: meta
                .get("titledLinks")
                .and_then(Value::as_array)
                .is_some_and(|links| !links.is_empty()),
        }
    }
}

/// Front-matter value, `null` when absent.
fn field(meta: &JsonMap, key: &str) -> Value {
    meta.get(key).cloned().unwrap_or(Value::Null)
}

/// Front-matter value, treating an explicit `null` the same as absent.
fn present<'a>(meta: &'a JsonMap, key: &str) -> Option<&'a Value> {
    meta.get(key).filter(|v| !v.is_null())
}

/// Repo-relative entry path, `/`-separated on every platform.
pub fn entry_path(chart_id: &str, filename: &str) -> String {
    format!("{CHARTS_SUBDIR}/{chart_id}/entries/{filename}")
}

/// Full record: the front-matter mapping with the raw body merged in
/// under `body`. An existing `body` key is overwritten in place.
pub fn full_record(meta: &JsonMap, body: &str) -> JsonMap {
    let mut record = meta.clone();
    record.insert("body".to_owned(), Value::String(body.to_owned()));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta_of(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn defaults_for_empty_metadata() {
        let record = IndexRecord::build(&JsonMap::new(), "", "c1", "a.md");
        assert_eq!(record.path, "content/iceberg-charts/c1/entries/a.md");
        assert_eq!(record.id, Value::Null);
        assert_eq!(record.name, Value::String("a.md".into()));
        assert_eq!(record.layer, Value::Null);
        assert_eq!(record.category_id, Value::Null);
        assert_eq!(record.tag_ids, json!([]));
        assert_eq!(record.last_updated, Value::Null);
        assert!(!record.has_content);
        assert!(!record.has_titled_links);
    }

    #[test]
    fn metadata_fields_carry_through_verbatim() {
        let meta = meta_of(json!({
            "id": 1,
            "name": "A",
            "layer": "surface",
            "categoryId": "cat",
            "tagIds": ["a", "b"],
            "lastUpdated": "2024-01-01",
        }));
        let record = IndexRecord::build(&meta, "text", "c1", "a.md");
        assert_eq!(record.id, json!(1));
        assert_eq!(record.name, json!("A"));
        assert_eq!(record.tag_ids, json!(["a", "b"]));
        assert_eq!(record.last_updated, json!("2024-01-01"));
        assert!(record.has_content);
    }

    #[test]
    fn blank_body_has_no_content() {
        let record = IndexRecord::build(&JsonMap::new(), "  \n\t \n", "c1", "a.md");
        assert!(!record.has_content);
    }

    #[test]
    fn titled_links_only_count_when_non_empty_sequence() {
        for (value, expected) in [
            (json!({"titledLinks": [{"title": "t", "url": "u"}]}), true),
            (json!({"titledLinks": []}), false),
            (json!({"titledLinks": "not-a-list"}), false),
            (json!({}), false),
        ] {
            let record = IndexRecord::build(&meta_of(value), "", "c1", "a.md");
            assert_eq!(record.has_titled_links, expected);
        }
    }

    #[test]
    fn explicit_null_name_falls_back_to_filename() {
        let meta = meta_of(json!({ "name": null, "tagIds": null }));
        let record = IndexRecord::build(&meta, "", "c1", "entry.md");
        assert_eq!(record.name, json!("entry.md"));
        assert_eq!(record.tag_ids, json!([]));
    }

    #[test]
    fn index_record_serializes_camel_case() {
        let record = IndexRecord::build(&JsonMap::new(), "x", "c1", "a.md");
        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "path",
                "id",
                "name",
                "layer",
                "categoryId",
                "tagIds",
                "lastUpdated",
                "hasContent",
                "hasTitledLinks"
            ]
        );
    }

    #[test]
    fn full_record_appends_body() {
        let meta = meta_of(json!({ "id": "x", "name": "Y" }));
        let record = full_record(&meta, "Hello");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "id": "x", "name": "Y", "body": "Hello" })
        );
    }

    #[test]
    fn full_record_body_overwrites_metadata_body() {
        let meta = meta_of(json!({ "body": "stale", "id": "x" }));
        let record = full_record(&meta, "fresh");
        assert_eq!(record["body"], json!("fresh"));
        assert_eq!(record["id"], json!("x"));
    }
}
