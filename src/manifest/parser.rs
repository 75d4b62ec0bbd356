//! JSON manifest decoding

use serde_json::{Map, Value};

use crate::core::error::{CatalogError, Result};
use crate::core::types::SpriteRect;
use crate::manifest::schema::SpriteManifest;

/// Decode manifest bytes into a [`SpriteManifest`].
///
/// Fails with [`CatalogError::ManifestDecode`] when the bytes are not JSON,
/// the top level is not an object, a sprite name is empty, an entry is not
/// an object, or a rect field holds something other than a number or null.
pub fn parse_manifest(bytes: &[u8]) -> Result<SpriteManifest> {
    // serde_json's Map is ordered, so the first reported problem is deterministic
    let raw: Map<String, Value> = serde_json::from_slice(bytes)?;

    let mut manifest = SpriteManifest::new();
    for (name, value) in raw {
        if name.is_empty() {
            return Err(CatalogError::ManifestDecode(
                "sprite name must not be empty".to_string(),
            ));
        }

        // Structs also deserialize from JSON arrays, so check the shape first
        if !value.is_object() {
            return Err(CatalogError::ManifestDecode(format!(
                "sprite '{}': expected an object, found {}",
                name,
                json_kind(&value)
            )));
        }

        let rect: SpriteRect = serde_json::from_value(value)
            .map_err(|e| CatalogError::ManifestDecode(format!("sprite '{}': {}", name, e)))?;
        manifest.insert(name, rect);
    }

    tracing::debug!("Parsed manifest with {} entries", manifest.len());
    Ok(manifest)
}

/// Decode a manifest from a JSON string
pub fn parse_manifest_str(json: &str) -> Result<SpriteManifest> {
    parse_manifest(json.as_bytes())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entries() {
        let json = r#"{
            "a": { "x": 0, "y": 0, "width": 10, "height": 10 },
            "b": { "x": 10, "y": 0, "width": 10, "height": 10 }
        }"#;

        let manifest = parse_manifest_str(json).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("b"), Some(&SpriteRect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_parse_partial_entry() {
        let manifest = parse_manifest_str(r#"{ "icon": { "width": 30, "height": 30 } }"#).unwrap();
        let rect = manifest.get("icon").unwrap();
        assert_eq!(rect.x, None);
        assert_eq!(rect.y, None);
        assert_eq!(rect.width, Some(30.0));
        assert_eq!(rect.height, Some(30.0));
    }

    #[test]
    fn test_null_field_is_absent() {
        let manifest = parse_manifest_str(r#"{ "icon": { "x": null, "width": 4 } }"#).unwrap();
        assert_eq!(manifest.get("icon").unwrap().x, None);
    }

    #[test]
    fn test_fractional_values_kept() {
        let manifest = parse_manifest_str(r#"{ "icon": { "x": 2.5, "width": 7.25 } }"#).unwrap();
        let rect = manifest.get("icon").unwrap();
        assert_eq!(rect.x, Some(2.5));
        assert_eq!(rect.width, Some(7.25));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{ "icon": { "x": 1, "rotated": true, "trimmed": { "w": 3 } } }"#;
        let manifest = parse_manifest_str(json).unwrap();
        assert_eq!(manifest.get("icon").unwrap().x, Some(1.0));
    }

    #[test]
    fn test_empty_object_is_empty_manifest() {
        let manifest = parse_manifest_str("{}").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_top_level_array_rejected() {
        let result = parse_manifest_str(r#"[{ "x": 0 }]"#);
        assert!(matches!(result, Err(CatalogError::ManifestDecode(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = parse_manifest(b"{ invalid json }");
        assert!(matches!(result, Err(CatalogError::ManifestDecode(_))));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(parse_manifest(b""), Err(CatalogError::ManifestDecode(_))));
    }

    #[test]
    fn test_entry_not_object_rejected() {
        for json in [
            r#"{ "icon": 5 }"#,
            r#"{ "icon": "0,0,1,1" }"#,
            r#"{ "icon": [0, 0, 1, 1] }"#,
            r#"{ "icon": null }"#,
        ] {
            match parse_manifest_str(json) {
                Err(CatalogError::ManifestDecode(msg)) => assert!(msg.contains("icon"), "{}", msg),
                other => panic!("Expected ManifestDecode for {}, got {:?}", json, other),
            }
        }
    }

    #[test]
    fn test_wrong_type_field_rejected() {
        let result = parse_manifest_str(r#"{ "icon": { "x": "12", "width": 4 } }"#);
        match result {
            Err(CatalogError::ManifestDecode(msg)) => assert!(msg.contains("icon")),
            other => panic!("Expected ManifestDecode, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = parse_manifest_str(r#"{ "": { "width": 4 } }"#);
        assert!(matches!(result, Err(CatalogError::ManifestDecode(_))));
    }

    #[test]
    fn test_negative_values_parse() {
        // Range checks belong to normalization, not decoding
        let manifest = parse_manifest_str(r#"{ "icon": { "x": -1 } }"#).unwrap();
        assert_eq!(manifest.get("icon").unwrap().x, Some(-1.0));
    }
}
