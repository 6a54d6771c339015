//! Tagged representation of a structured entity field.
//!
//! Structured fields (`permissions`, `teamIds`, `images`, `quotes`) are
//! persisted as JSON text and served to API callers as decoded JSON. A
//! [`JsonField`] is either still in its text form or already decoded, and the
//! conversions between the two are total:
//!
//! - [`JsonField::decode`] parses text, keeping the raw text when it is not
//!   valid JSON.
//! - [`JsonField::encode`] serializes a decoded value back to text.
//!
//! On the wire a JSON string maps to [`JsonField::Text`] and every other JSON
//! value to [`JsonField::Value`], so a caller that pre-serializes a field
//! sends text and it is stored as-is.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A structured field in either storage form or API form.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonField {
    /// JSON-encoded text, or opaque text that failed to decode.
    Text(String),
    /// Decoded JSON value.
    Value(serde_json::Value),
}

impl JsonField {
    /// Convert to API form.
    ///
    /// Text that does not parse as JSON is returned unchanged.
    pub fn decode(self) -> Self {
        match self {
            Self::Text(text) => match serde_json::from_str(&text) {
                Ok(value) => Self::Value(value),
                Err(_) => Self::Text(text),
            },
            decoded @ Self::Value(_) => decoded,
        }
    }

    /// Convert to storage form. Text is never re-encoded.
    ///
    /// Every decoded value is serialized, scalars included: `5` is stored as
    /// the text `5`, which decodes back to the number.
    pub fn encode(self) -> Self {
        match self {
            Self::Value(value) => Self::Text(value.to_string()),
            text @ Self::Text(_) => text,
        }
    }

    /// Whether this field holds a decoded value.
    ///
    /// After [`decode`](Self::decode), `false` means the stored text was not
    /// valid JSON.
    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The text persisted for this field, serializing a decoded value.
    pub fn to_storage_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Value(value) => value.to_string(),
        }
    }
}

impl From<serde_json::Value> for JsonField {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Value(other),
        }
    }
}

impl From<String> for JsonField {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for JsonField {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl Serialize for JsonField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JsonField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

/// Postgres glue: a `JsonField` column is plain `TEXT`.
///
/// Rows always decode to [`JsonField::Text`]; turning that into API form is
/// the job of [`crate::normalize`].
#[cfg(feature = "sqlx")]
mod pg {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};

    use super::JsonField;

    impl sqlx::Type<Postgres> for JsonField {
        fn type_info() -> PgTypeInfo {
            <String as sqlx::Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <String as sqlx::Type<Postgres>>::compatible(ty)
        }
    }

    impl<'r> sqlx::Decode<'r, Postgres> for JsonField {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            let text = <String as sqlx::Decode<'r, Postgres>>::decode(value)?;
            Ok(JsonField::Text(text))
        }
    }

    impl<'q> sqlx::Encode<'q, Postgres> for JsonField {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            let text = self.to_storage_text();
            <String as sqlx::Encode<'q, Postgres>>::encode_by_ref(&text, buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_parses_valid_json_text() {
        let field = JsonField::from(r#"["a.png","b.png"]"#).decode();
        assert_eq!(field, JsonField::Value(json!(["a.png", "b.png"])));
    }

    #[test]
    fn decode_keeps_malformed_text() {
        let field = JsonField::from("not valid json").decode();
        assert_eq!(field, JsonField::Text("not valid json".into()));
        assert!(!field.is_decoded());
    }

    #[test]
    fn decode_leaves_values_alone() {
        let field = JsonField::Value(json!({"admin": true}));
        assert_eq!(field.clone().decode(), field);
    }

    #[test]
    fn encode_serializes_values_compactly() {
        let field = JsonField::Value(json!([{"item": "cement", "qty": 10}])).encode();
        assert_eq!(field.as_text(), Some(r#"[{"item":"cement","qty":10}]"#));
    }

    #[test]
    fn encode_stores_scalars_as_json_text() {
        // Scalars are encoded like arrays and objects.
        let number: JsonField = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(number.clone(), JsonField::Value(json!(5)));
        assert_eq!(number.encode(), JsonField::Text("5".into()));

        let flag: JsonField = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(flag.encode(), JsonField::Text("true".into()));

        assert_eq!(
            JsonField::Value(serde_json::Value::Null).encode(),
            JsonField::Text("null".into())
        );

        assert_eq!(JsonField::from("5").decode(), JsonField::Value(json!(5)));
    }

    #[test]
    fn encode_never_double_encodes_text() {
        let field = JsonField::from(r#"["x"]"#).encode();
        assert_eq!(field, JsonField::Text(r#"["x"]"#.into()));
    }

    #[test]
    fn wire_string_is_text_and_array_is_value() {
        let text: JsonField = serde_json::from_value(json!("[1,2]")).unwrap();
        assert_matches!(text, JsonField::Text(ref t) if t == "[1,2]");

        let value: JsonField = serde_json::from_value(json!([1, 2])).unwrap();
        assert_matches!(value, JsonField::Value(_));
    }

    #[test]
    fn serializes_as_plain_json() {
        let out = serde_json::to_value(JsonField::Value(json!({"k": [1]}))).unwrap();
        assert_eq!(out, json!({"k": [1]}));

        let out = serde_json::to_value(JsonField::from("oops")).unwrap();
        assert_eq!(out, json!("oops"));
    }

    #[test]
    fn absent_field_deserializes_to_none() {
        #[derive(Deserialize)]
        struct Payload {
            images: Option<JsonField>,
        }

        let payload: Payload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.images.is_none());

        let payload: Payload = serde_json::from_value(json!({"images": null})).unwrap();
        assert!(payload.images.is_none());
    }
}
