//! Envelope resolver: raw profiler bytes to a typed [`Container`].
//!
//! `system_profiler -json` always emits a top-level object keyed by the
//! category, but the value under that key comes in three conventions (see
//! [`EnvelopeShape`]). The shape is declared per category, never sniffed:
//! a value that does not match the declaration is an
//! [`ShapeError::UnexpectedStructure`], kept apart from a missing key
//! ([`ShapeError::CategoryKeyNotFound`]) and from malformed JSON
//! ([`ParseError::Syntax`]).
//!
//! For the Items and Object shapes only the first envelope element is used.
//! A present key with an empty envelope array, or an Items element without
//! `_items`, resolves to an empty container.

use crate::category::{Category, EnvelopeShape, Schema};
use crate::container::{ArrayData, Container, ItemsData, ObjectData};
use crate::error::{ParseError, ShapeError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

const NAME_FIELD: &str = "_name";
const ITEMS_FIELD: &str = "_items";

/// Decode `bytes` for the category bound to schema `S`.
pub fn parse_schema<S: Schema>(bytes: &[u8]) -> Result<Container<S::Record>, ParseError> {
    parse(bytes, S::CATEGORY, S::CATEGORY.shape())
}

/// Decode `bytes` as the payload of `category` using `shape`.
pub fn parse<T: DeserializeOwned>(
    bytes: &[u8],
    category: Category,
    shape: EnvelopeShape,
) -> Result<Container<T>, ParseError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|err| ParseError::Syntax {
        category,
        detail: err.to_string(),
    })?;
    let payload = take_category_value(document, category)?;

    let container = match shape {
        EnvelopeShape::Items => Container::Items(resolve_items(payload, category)?),
        EnvelopeShape::Array => Container::Array(resolve_array(payload, category)?),
        EnvelopeShape::Object => Container::Object(resolve_object(payload, category)?),
    };
    Ok(container)
}

fn take_category_value(document: Value, category: Category) -> Result<Value, ShapeError> {
    match document {
        Value::Object(mut top) => top
            .remove(category.as_str())
            .ok_or(ShapeError::CategoryKeyNotFound { category }),
        other => Err(unexpected(
            category,
            format!("top-level document is {}, expected an object", kind_of(&other)),
        )),
    }
}

fn resolve_items<T: DeserializeOwned>(
    payload: Value,
    category: Category,
) -> Result<ItemsData<T>, ShapeError> {
    let Some(mut element) = first_element(payload, category)? else {
        return Ok(ItemsData::new(String::new(), Vec::new()));
    };

    let name = match element.remove(NAME_FIELD) {
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(unexpected(
                category,
                format!("{NAME_FIELD} is {}, expected a string", kind_of(&other)),
            ));
        }
        None => {
            return Err(unexpected(
                category,
                format!("envelope element has no {NAME_FIELD}"),
            ));
        }
    };

    let items = match element.remove(ITEMS_FIELD) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(records)) => decode_records(records, category)?,
        Some(other) => {
            return Err(unexpected(
                category,
                format!("{ITEMS_FIELD} is {}, expected an array", kind_of(&other)),
            ));
        }
    };

    Ok(ItemsData::new(name, items))
}

fn resolve_array<T: DeserializeOwned>(
    payload: Value,
    category: Category,
) -> Result<ArrayData<T>, ShapeError> {
    match payload {
        Value::Array(records) => Ok(ArrayData(decode_records(records, category)?)),
        other => Err(unexpected(
            category,
            format!("value is {}, expected an array of records", kind_of(&other)),
        )),
    }
}

fn resolve_object<T: DeserializeOwned>(
    payload: Value,
    category: Category,
) -> Result<ObjectData<T>, ShapeError> {
    let fields = first_element(payload, category)?.unwrap_or_default();
    let record = serde_json::from_value(Value::Object(fields.clone())).map_err(|err| {
        unexpected(category, format!("properties do not match schema: {err}"))
    })?;
    Ok(ObjectData::new(fields, record))
}

/// First element of the one-element envelope array, as an object.
///
/// `Ok(None)` when the array is empty.
fn first_element(
    payload: Value,
    category: Category,
) -> Result<Option<Map<String, Value>>, ShapeError> {
    let elements = match payload {
        Value::Array(elements) => elements,
        other => {
            return Err(unexpected(
                category,
                format!("value is {}, expected a one-element array", kind_of(&other)),
            ));
        }
    };
    if elements.len() > 1 {
        debug!(
            category = %category,
            ignored = elements.len() - 1,
            "using first envelope element only"
        );
    }
    match elements.into_iter().next() {
        None => Ok(None),
        Some(Value::Object(element)) => Ok(Some(element)),
        Some(other) => Err(unexpected(
            category,
            format!("envelope element is {}, expected an object", kind_of(&other)),
        )),
    }
}

fn decode_records<T: DeserializeOwned>(
    records: Vec<Value>,
    category: Category,
) -> Result<Vec<T>, ShapeError> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            serde_json::from_value(record)
                .map_err(|err| unexpected(category, format!("record {idx}: {err}")))
        })
        .collect()
}

fn unexpected(category: Category, detail: String) -> ShapeError {
    ShapeError::UnexpectedStructure { category, detail }
}

fn kind_of(value: &Value) -> &'static str {
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
    use crate::category::schema;
    use crate::records::GenericRecord;
    use crate::records::hardware::HardwareOverview;
    use serde_json::json;

    fn generic(
        raw: &str,
        category: Category,
        shape: EnvelopeShape,
    ) -> Result<Container<GenericRecord>, ParseError> {
        parse(raw.as_bytes(), category, shape)
    }

    #[test]
    fn items_shape_uses_name_and_records() {
        let container = generic(
            r#"{"SPAudioDataType":[{"_name":"x","_items":[{"_name":"d1"}]}]}"#,
            Category::Audio,
            EnvelopeShape::Items,
        )
        .unwrap();
        let items = container.as_items().unwrap();
        assert_eq!(items.name, "x");
        assert_eq!(items.items.len(), 1);
        assert_eq!(items.items[0].get("_name"), Some(&json!("d1")));
    }

    #[test]
    fn items_shape_ignores_extra_elements() {
        let container = generic(
            r#"{"SPAudioDataType":[{"_name":"first"},{"_name":"second","_items":[{}]}]}"#,
            Category::Audio,
            EnvelopeShape::Items,
        )
        .unwrap();
        let items = container.as_items().unwrap();
        assert_eq!(items.name, "first");
        assert!(items.is_empty());
    }

    #[test]
    fn items_shape_treats_absent_or_null_list_as_empty() {
        for raw in [
            r#"{"SPAudioDataType":[{"_name":"x"}]}"#,
            r#"{"SPAudioDataType":[{"_name":"x","_items":null}]}"#,
        ] {
            let container = generic(raw, Category::Audio, EnvelopeShape::Items).unwrap();
            assert_eq!(container, Container::Items(ItemsData::new("x", Vec::new())));
        }

        let empty = generic(r#"{"SPAudioDataType":[]}"#, Category::Audio, EnvelopeShape::Items)
            .unwrap();
        assert_eq!(empty, Container::Items(ItemsData::new("", Vec::new())));
    }

    #[test]
    fn items_shape_requires_name() {
        let err = generic(
            r#"{"SPAudioDataType":[{"_items":[]}]}"#,
            Category::Audio,
            EnvelopeShape::Items,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Shape(ShapeError::UnexpectedStructure { .. })
        ));
    }

    #[test]
    fn array_shape_preserves_order_and_allows_empty() {
        let container = generic(
            r#"{"SPApplicationsDataType":[{"_name":"a"},{"_name":"b"}]}"#,
            Category::Applications,
            EnvelopeShape::Array,
        )
        .unwrap();
        let names: Vec<&str> = container
            .records()
            .unwrap()
            .iter()
            .filter_map(|r| r.get("_name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, ["a", "b"]);

        let empty = generic(
            r#"{"SPApplicationsDataType":[]}"#,
            Category::Applications,
            EnvelopeShape::Array,
        )
        .unwrap();
        assert_eq!(empty, Container::Array(ArrayData(Vec::new())));
    }

    #[test]
    fn object_shape_exposes_field_map() {
        let container = generic(
            r#"{"SPHardwareDataType":[{"field":"v"}]}"#,
            Category::Hardware,
            EnvelopeShape::Object,
        )
        .unwrap();
        let object = container.as_object().unwrap();
        assert_eq!(object.get_str("field"), Some("v"));
        assert_eq!(object.fields().len(), 1);
    }

    #[test]
    fn object_shape_with_empty_envelope_is_empty() {
        let container = parse_schema::<schema::Hardware>(br#"{"SPHardwareDataType":[]}"#).unwrap();
        let object = container.as_object().unwrap();
        assert!(object.fields().is_empty());
        assert_eq!(object.record(), &HardwareOverview::default());

        let envelope = container.render_envelope(Category::Hardware);
        let again = parse_schema::<schema::Hardware>(envelope.as_bytes()).unwrap();
        assert_eq!(again, container);
    }

    #[test]
    fn generic_items_categories_keep_their_name() {
        let container = parse_schema::<schema::Logs>(
            br#"{"SPLogsDataType":[{"_name":"logs","_items":[{"_name":"a"},{"_name":"b"}]}]}"#,
        )
        .unwrap();
        let items = container.as_items().unwrap();
        assert_eq!(items.name, "logs");
        let names: Vec<_> = items
            .items
            .iter()
            .filter_map(|r| r.get("_name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn missing_key_is_not_a_syntax_error() {
        let err = generic(r#"{"OTHER":[]}"#, Category::Audio, EnvelopeShape::Items).unwrap_err();
        assert_eq!(
            err,
            ParseError::Shape(ShapeError::CategoryKeyNotFound {
                category: Category::Audio
            })
        );

        let syntax = generic("{not json", Category::Audio, EnvelopeShape::Items).unwrap_err();
        assert!(matches!(syntax, ParseError::Syntax { .. }));
    }

    #[test]
    fn shape_mismatch_is_reported_not_coerced() {
        let cases = [
            (r#"{"SPAudioDataType":{"_name":"x"}}"#, EnvelopeShape::Items),
            (r#"{"SPAudioDataType":{"_name":"x"}}"#, EnvelopeShape::Array),
            (r#"{"SPAudioDataType":["text"]}"#, EnvelopeShape::Object),
            (r#"{"SPAudioDataType":[{"_name":"x","_items":{}}]}"#, EnvelopeShape::Items),
            (r#"[{"SPAudioDataType":[]}]"#, EnvelopeShape::Array),
        ];
        for (raw, shape) in cases {
            let err = generic(raw, Category::Audio, shape).unwrap_err();
            assert!(
                matches!(err, ParseError::Shape(ShapeError::UnexpectedStructure { .. })),
                "{raw} as {shape}: {err:?}"
            );
        }
    }

    #[test]
    fn typed_records_reject_mismatched_fields() {
        let ok = parse_schema::<schema::Audio>(
            br#"{"SPAudioDataType":[{"_name":"coreaudio_device","_items":[
                {"_name":"Speakers","coreaudio_device_srate":48000}
            ]}]}"#,
        )
        .unwrap();
        let devices = ok.records().unwrap();
        assert_eq!(devices[0].name, "Speakers");
        assert_eq!(devices[0].coreaudio_device_srate, Some(48000));

        let err = parse_schema::<schema::Audio>(
            br#"{"SPAudioDataType":[{"_name":"coreaudio_device","_items":[
                {"_name":"Speakers","coreaudio_device_srate":"fast"}
            ]}]}"#,
        )
        .unwrap_err();
        match err {
            ParseError::Shape(ShapeError::UnexpectedStructure { detail, .. }) => {
                assert!(detail.starts_with("record 0"), "{detail}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn hardware_object_has_typed_view() {
        let container = parse_schema::<schema::Hardware>(
            br#"{"SPHardwareDataType":[{
                "_name":"hardware_overview",
                "chip_type":"Apple M2",
                "platform_UUID":"ABC",
                "new_key":1
            }]}"#,
        )
        .unwrap();
        let object = container.as_object().unwrap();
        assert_eq!(object.record().chip_type.as_deref(), Some("Apple M2"));
        assert_eq!(object.record().platform_uuid.as_deref(), Some("ABC"));
        assert_eq!(object.get("new_key"), Some(&json!(1)));
    }

    #[test]
    fn rendered_envelope_resolves_to_equivalent_container() {
        let raw = br#"{"SPNVMeDataType":[{"_name":"nvme","_items":[
            {"_name":"Apple SSD Controller","_items":[
                {"_name":"APPLE SSD AP0512Z","size_in_bytes":500277790720,
                 "volumes":[{"_name":"disk0s1","size_in_bytes":524288000}]}
            ]}
        ]}]}"#;
        let first = parse_schema::<schema::Nvme>(raw).unwrap();
        let again =
            parse_schema::<schema::Nvme>(first.render_envelope(Category::Nvme).as_bytes()).unwrap();
        assert_eq!(first, again);

        let controller = &first.records().unwrap()[0];
        assert_eq!(controller.devices[0].volumes[0].name, "disk0s1");
    }
}
