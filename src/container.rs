//! Shape-specific containers for one category's decoded payload.
//!
//! The three variants mirror the envelope shapes in [`EnvelopeShape`]. A
//! container is only ever built by the resolver, which has already checked
//! its structure, so rendering does not return an error.

use crate::category::{Category, EnvelopeShape};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Named, ordered list of records (`[{"_name": ..., "_items": [...]}]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsData<T> {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_items")]
    pub items: Vec<T>,
}

/// Bare ordered list of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArrayData<T>(pub Vec<T>);

/// Flat property bag plus its typed view.
///
/// `fields` is the map exactly as decoded and is what gets rendered;
/// `record` is the same data decoded through the category's schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectData<T> {
    fields: Map<String, Value>,
    record: T,
}

/// Decoded payload for exactly one category.
#[derive(Debug, Clone, PartialEq)]
pub enum Container<T> {
    Items(ItemsData<T>),
    Array(ArrayData<T>),
    Object(ObjectData<T>),
}

impl<T> ItemsData<T> {
    pub fn new(name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> ArrayData<T> {
    pub fn records(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> ObjectData<T> {
    pub fn new(fields: Map<String, Value>, record: T) -> Self {
        Self { fields, record }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw value for one field, if the tool reported it.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field value when it is a JSON string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn record(&self) -> &T {
        &self.record
    }
}

impl<T> Serialize for ObjectData<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

impl<T> Container<T> {
    pub fn shape(&self) -> EnvelopeShape {
        match self {
            Container::Items(_) => EnvelopeShape::Items,
            Container::Array(_) => EnvelopeShape::Array,
            Container::Object(_) => EnvelopeShape::Object,
        }
    }

    /// Records for the list-shaped variants; `None` for objects.
    pub fn records(&self) -> Option<&[T]> {
        match self {
            Container::Items(data) => Some(&data.items),
            Container::Array(data) => Some(data.records()),
            Container::Object(_) => None,
        }
    }

    pub fn as_items(&self) -> Option<&ItemsData<T>> {
        match self {
            Container::Items(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayData<T>> {
        match self {
            Container::Array(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectData<T>> {
        match self {
            Container::Object(data) => Some(data),
            _ => None,
        }
    }
}

impl<T: Serialize> Container<T> {
    /// Payload as a JSON value (no envelope).
    ///
    /// # Panics
    ///
    /// If a record's `Serialize` impl fails. Every record type derives it
    /// over string-keyed fields, so a failure is a broken record type rather
    /// than bad tool output.
    pub fn to_value(&self) -> Value {
        let converted = match self {
            Container::Items(data) => serde_json::to_value(data),
            Container::Array(data) => serde_json::to_value(data),
            Container::Object(data) => return Value::Object(data.fields.clone()),
        };
        match converted {
            Ok(value) => value,
            Err(err) => panic!("record type failed to serialize: {err}"),
        }
    }

    /// Pretty-printed payload. Object keys come out sorted, so output is
    /// stable across runs and suitable for diffs and snapshots.
    pub fn render(&self) -> String {
        format!("{:#}", self.to_value())
    }

    /// Payload wrapped back in the tool's envelope for `category`.
    ///
    /// Feeding the result to [`crate::resolver::parse`] yields an equivalent
    /// container.
    pub fn to_envelope(&self, category: Category) -> Value {
        let payload = self.to_value();
        let wrapped = match self.shape() {
            EnvelopeShape::Array => payload,
            EnvelopeShape::Items | EnvelopeShape::Object => Value::Array(vec![payload]),
        };
        let mut document = Map::new();
        document.insert(category.as_str().to_string(), wrapped);
        Value::Object(document)
    }

    pub fn render_envelope(&self, category: Category) -> String {
        format!("{:#}", self.to_envelope(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::GenericRecord;
    use serde_json::json;

    fn record(name: &str) -> GenericRecord {
        let mut map = Map::new();
        map.insert("_name".into(), Value::String(name.into()));
        map
    }

    #[test]
    fn items_render_uses_tool_field_names() {
        let container = Container::Items(ItemsData::new("x", vec![record("d1")]));
        let rendered: Value = serde_json::from_str(&container.render()).unwrap();
        assert_eq!(rendered, json!({"_name": "x", "_items": [{"_name": "d1"}]}));
        assert!(container.render().contains('\n'), "render is indented");
    }

    #[test]
    fn render_is_key_stable() {
        let mut fields = Map::new();
        fields.insert("zeta".into(), json!("z"));
        fields.insert("alpha".into(), json!("a"));
        let container = Container::Object(ObjectData::new(fields, GenericRecord::new()));
        let rendered = container.render();
        let alpha = rendered.find("alpha").unwrap();
        let zeta = rendered.find("zeta").unwrap();
        assert!(alpha < zeta);
        assert_eq!(rendered, container.clone().render());
    }

    #[test]
    fn envelope_wraps_per_shape() {
        let array = Container::Array(ArrayData(vec![record("a")]));
        assert_eq!(
            array.to_envelope(Category::Applications),
            json!({"SPApplicationsDataType": [{"_name": "a"}]})
        );

        let items = Container::Items(ItemsData::new("x", Vec::<GenericRecord>::new()));
        assert_eq!(
            items.to_envelope(Category::Audio),
            json!({"SPAudioDataType": [{"_name": "x", "_items": []}]})
        );

        let mut fields = Map::new();
        fields.insert("field".into(), json!("v"));
        let object = Container::Object(ObjectData::new(fields, GenericRecord::new()));
        assert_eq!(
            object.to_envelope(Category::Hardware),
            json!({"SPHardwareDataType": [{"field": "v"}]})
        );
    }

    #[test]
    fn accessors_follow_variant() {
        let array = Container::Array(ArrayData(vec![record("a"), record("b")]));
        assert_eq!(array.shape(), EnvelopeShape::Array);
        assert_eq!(array.records().map(|r| r.len()), Some(2));
        assert!(array.as_items().is_none());

        let object: Container<GenericRecord> =
            Container::Object(ObjectData::new(record("hw"), record("hw")));
        assert!(object.records().is_none());
        assert_eq!(object.as_object().and_then(|o| o.get_str("_name")), Some("hw"));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Err(serde::ser::Error::custom("refuses to serialize"))
        }
    }

    #[test]
    #[should_panic(expected = "record type failed to serialize")]
    fn broken_record_type_panics_instead_of_rendering_a_placeholder() {
        let container = Container::Array(ArrayData(vec![Unserializable]));
        let _ = container.render();
    }
}
