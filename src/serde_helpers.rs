//! Serde helpers for flexible deserialization and response validation.
//!
//! Every response body goes through [`deserialize_with_warnings`], which turns a shape mismatch
//! into a [`Kind::Validation`](crate::error::Kind::Validation) error naming the JSON path of the
//! offending value. When the `tracing` feature is enabled it also logs unknown fields, which
//! usually means the Gamma API grew a field this crate does not model yet.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// A `serde_as` type that deserializes strings or integers as `String`.
///
/// Gamma is inconsistent about ids: the same field is a string on one endpoint and a number on
/// another. Use with `#[serde_as(as = "StringFromAny")]` or `#[serde_as(as = "Option<StringFromAny>")]`.
pub struct StringFromAny;

impl<'de> serde_with::DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::Visitor;

        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string or integer")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_owned())
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

impl serde_with::SerializeAs<String> for StringFromAny {
    fn serialize_as<S>(source: &String, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(source)
    }
}

/// A `serde_as` type for list fields that Gamma sends as a JSON-encoded string
/// (`"[\"Yes\", \"No\"]"`) but that may also arrive as a plain JSON array.
///
/// Serializes back as a plain array.
pub struct JsonStringOrSeq;

impl<'de, T: DeserializeOwned> serde_with::DeserializeAs<'de, Vec<T>> for JsonStringOrSeq {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw<T> {
            Seq(Vec<T>),
            Encoded(String),
        }

        match Raw::<T>::deserialize(deserializer)? {
            Raw::Seq(items) => Ok(items),
            Raw::Encoded(text) => serde_json::from_str(&text).map_err(de::Error::custom),
        }
    }
}

impl<T: Serialize> serde_with::SerializeAs<Vec<T>> for JsonStringOrSeq {
    fn serialize_as<S>(source: &Vec<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        source.serialize(serializer)
    }
}

/// Deserialize a response document into `T`, validating its shape.
///
/// Missing required fields and wrongly typed scalars fail with a validation error carrying the
/// JSON path (`.` for the root, `[2].outcomes` for a list element). Unknown fields are accepted
/// and, with the `tracing` feature, logged as warnings.
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    #[cfg(feature = "tracing")]
    warn_unknown_fields::<T>(&value);

    deserialize_with_path(value)
}

fn deserialize_with_path<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    #[cfg(feature = "tracing")]
    let original = value.clone();

    let result: Result<T, _> = serde_path_to_error::deserialize(value);
    result.map_err(|err| {
        let path = err.path().to_string();
        let reason = err.into_inner().to_string();

        #[cfg(feature = "tracing")]
        tracing::error!(
            type_name = %std::any::type_name::<T>(),
            path = %path,
            value = %format_value(lookup_value(&original, &path)),
            error = %reason,
            "deserialization failed"
        );

        Error::validation_at(path, reason)
    })
}

#[cfg(feature = "tracing")]
fn warn_unknown_fields<T: DeserializeOwned>(value: &Value) {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    let mut unknown_paths: Vec<String> = Vec::new();
    let outcome: Result<T, _> = serde_ignored::deserialize(value.clone(), |path| {
        unknown_paths.push(path.to_string());
    });

    // Shape errors are reported by `deserialize_with_path`
    if outcome.is_err() {
        return;
    }

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(value, &path)),
            "unknown field in API response"
        );
    }
}

/// Look up a value in a JSON structure by path.
///
/// Handles paths from both `serde_ignored` and `serde_path_to_error`:
/// - `?` for Option wrappers (skipped, as JSON has no Option representation)
/// - Numeric indices for arrays: `items.0` or `items[0]`
/// - Field names for objects: `foo.bar` or `foo.bar[0].baz`
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in parse_path_segments(path) {
        if segment.is_empty() || segment == "?" {
            continue;
        }

        match current {
            Value::Object(map) => {
                current = map.get(&segment)?;
            }
            Value::Array(arr) => {
                let index: usize = segment.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Split `data[15].condition_id` into `["data", "15", "condition_id"]`.
#[cfg(feature = "tracing")]
fn parse_path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in path.chars() {
        match ch {
            '.' | '[' | ']' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<unable to retrieve>".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_with::serde_as;

    use super::*;
    use crate::error::{Kind, Validation};

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        known_field: String,
        #[serde(default)]
        optional_field: Option<i32>,
    }

    #[serde_as]
    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Listing {
        #[serde_as(as = "StringFromAny")]
        id: String,
        #[serde_as(as = "Option<JsonStringOrSeq>")]
        outcomes: Option<Vec<String>>,
    }

    #[test]
    fn deserialize_with_unknown_fields() {
        let json = serde_json::json!({
            "known_field": "value",
            "unknown_field": "extra",
            "another_unknown": 123
        });

        let result: TestStruct = deserialize_with_warnings(json).expect("deserialization failed");
        assert_eq!(result.known_field, "value");
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn missing_required_field_is_validation_error() {
        let json = serde_json::json!({ "optional_field": 42 });

        let err = deserialize_with_warnings::<TestStruct>(json).unwrap_err();
        assert_eq!(err.kind(), Kind::Validation);

        let validation = err.downcast_ref::<Validation>().expect("payload");
        assert_eq!(validation.field.as_deref(), Some("."));
        assert!(validation.reason.contains("known_field"));
    }

    #[test]
    fn wrong_type_reports_element_path() {
        let json = serde_json::json!([
            { "known_field": "ok" },
            { "known_field": "ok", "optional_field": "not a number" }
        ]);

        let err = deserialize_with_warnings::<Vec<TestStruct>>(json).unwrap_err();
        let validation = err.downcast_ref::<Validation>().expect("payload");

        assert_eq!(validation.field.as_deref(), Some("[1].optional_field"));
        assert!(validation.reason.contains("invalid type"));
    }

    #[test]
    fn string_from_any_accepts_integers() {
        let listing: Listing =
            serde_json::from_value(serde_json::json!({ "id": 12345 })).expect("deserialize");
        assert_eq!(listing.id, "12345");

        let listing: Listing =
            serde_json::from_value(serde_json::json!({ "id": -42 })).expect("deserialize");
        assert_eq!(listing.id, "-42");
    }

    #[test]
    fn json_string_or_seq_accepts_encoded_string() {
        let json = serde_json::json!({ "id": "1", "outcomes": "[\"Yes\", \"No\"]" });

        let listing: Listing = serde_json::from_value(json).expect("deserialize");
        assert_eq!(
            listing.outcomes,
            Some(vec!["Yes".to_owned(), "No".to_owned()])
        );
    }

    #[test]
    fn json_string_or_seq_accepts_plain_array() {
        let json = serde_json::json!({ "id": "1", "outcomes": ["Yes", "No"] });

        let listing: Listing = serde_json::from_value(json).expect("deserialize");
        assert_eq!(
            listing.outcomes,
            Some(vec!["Yes".to_owned(), "No".to_owned()])
        );
    }

    #[test]
    fn json_string_or_seq_rejects_garbage() {
        let json = serde_json::json!({ "id": "1", "outcomes": "Yes, No" });

        serde_json::from_value::<Listing>(json).unwrap_err();
    }

    #[test]
    fn json_string_or_seq_serializes_as_array() {
        let listing = Listing {
            id: "7".to_owned(),
            outcomes: Some(vec!["Yes".to_owned(), "No".to_owned()]),
        };

        let json = serde_json::to_value(&listing).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "id": "7", "outcomes": ["Yes", "No"] })
        );
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_handles_bracket_and_option_markers() {
        let json = serde_json::json!({ "data": [{ "inner": "value" }] });

        assert_eq!(
            lookup_value(&json, "data[0].inner"),
            Some(&Value::String("value".to_owned()))
        );
        assert_eq!(
            lookup_value(&json, "?.data.0.?.inner"),
            Some(&Value::String("value".to_owned()))
        );
        assert_eq!(lookup_value(&json, "data.7"), None);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn format_none_shows_placeholder() {
        assert_eq!(format_value(None), "<unable to retrieve>");
    }
}
