//! Entity normalization: storage form <-> API form.
//!
//! Every entity declares which of its fields are JSON-encoded by implementing
//! [`JsonFields`], normally through the [`json_fields!`](crate::json_fields)
//! macro. [`normalize`] decodes those fields on the read path and
//! [`denormalize`] encodes them on the write path. Fields outside the
//! declared set are never touched.

use crate::json_field::JsonField;

/// Static schema of an entity's JSON-encoded fields.
pub trait JsonFields: Sized {
    /// API names of the designated fields, in declaration order.
    const JSON_FIELDS: &'static [&'static str];

    /// Mutable access to exactly the fields named in [`Self::JSON_FIELDS`].
    fn json_fields_mut(&mut self) -> Vec<&mut Option<JsonField>>;

    /// Decode every designated field (API form).
    fn normalized(self) -> Self {
        map_fields(self, JsonField::decode)
    }

    /// Encode every designated field (storage form).
    fn denormalized(self) -> Self {
        map_fields(self, JsonField::encode)
    }
}

/// Decode an entity read from storage. `None` passes through unchanged.
pub fn normalize<T: JsonFields>(entity: Option<T>) -> Option<T> {
    entity.map(JsonFields::normalized)
}

/// Decode every entity of a list read from storage.
pub fn normalize_all<T: JsonFields>(entities: Vec<T>) -> Vec<T> {
    entities.into_iter().map(JsonFields::normalized).collect()
}

/// Encode an entity before handing it to storage.
pub fn denormalize<T: JsonFields>(entity: T) -> T {
    entity.denormalized()
}

fn map_fields<T: JsonFields>(mut entity: T, op: fn(JsonField) -> JsonField) -> T {
    for slot in entity.json_fields_mut() {
        *slot = slot.take().map(op);
    }
    entity
}

/// Implement [`JsonFields`] for a struct whose designated fields are
/// `Option<JsonField>`.
///
/// ```ignore
/// json_fields!(Task {
///     team_ids => "teamIds",
///     images => "images",
/// });
/// json_fields!(TaskStatus {});
/// ```
#[macro_export]
macro_rules! json_fields {
    ($entity:ty { $($field:ident => $name:literal),* $(,)? }) => {
        impl $crate::normalize::JsonFields for $entity {
            const JSON_FIELDS: &'static [&'static str] = &[$($name),*];

            fn json_fields_mut(
                &mut self,
            ) -> Vec<&mut Option<$crate::json_field::JsonField>> {
                vec![$(&mut self.$field),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        id: String,
        note: String,
        permissions: Option<JsonField>,
        quotes: Option<JsonField>,
    }

    crate::json_fields!(Order {
        permissions => "permissions",
        quotes => "quotes",
    });

    #[derive(Debug, Clone, PartialEq)]
    struct Lookup {
        name: String,
    }

    crate::json_fields!(Lookup {});

    fn order(permissions: Option<JsonField>, quotes: Option<JsonField>) -> Order {
        Order {
            id: "o-1".into(),
            note: "[1,2,3]".into(),
            permissions,
            quotes,
        }
    }

    fn value(field: &Option<JsonField>) -> Option<&Value> {
        field.as_ref().and_then(JsonField::as_value)
    }

    #[test]
    fn round_trip_preserves_structured_values() {
        let samples = [
            json!(["read", "write"]),
            json!({"admin": true}),
            json!([{"item": "cement", "qty": 10, "tags": {"bulk": [1, 2]}}]),
            json!([]),
            json!({}),
        ];

        for sample in samples {
            let original = order(
                Some(JsonField::Value(sample.clone())),
                Some(JsonField::Value(sample.clone())),
            );
            let stored = denormalize(original.clone());
            assert!(stored.quotes.as_ref().unwrap().as_text().is_some());

            let restored = normalize(Some(stored)).unwrap();
            assert_eq!(value(&restored.permissions), Some(&sample));
            assert_eq!(value(&restored.quotes), Some(&sample));
            assert_eq!(restored, original);
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let stored = order(
            Some(JsonField::from(r#"["read"]"#)),
            Some(JsonField::from("garbage")),
        );
        let once = normalize(Some(stored)).unwrap();
        let twice = normalize(Some(once.clone())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_text_survives_normalize() {
        let stored = order(Some(JsonField::from("not valid json")), None);
        let out = normalize(Some(stored)).unwrap();
        assert_eq!(out.permissions, Some(JsonField::Text("not valid json".into())));
    }

    #[test]
    fn denormalize_serializes_quotes() {
        let input = order(None, Some(JsonField::Value(json!([{"item": "cement", "qty": 10}]))));
        let out = denormalize(input);
        assert_eq!(
            out.quotes,
            Some(JsonField::Text(r#"[{"item":"cement","qty":10}]"#.into()))
        );
        assert_eq!(out.permissions, None);
    }

    #[test]
    fn absent_entity_passes_through() {
        assert_eq!(normalize::<Order>(None), None);
    }

    #[test]
    fn undeclared_fields_are_untouched() {
        let input = order(None, None);
        assert_eq!(normalize(Some(input.clone())).unwrap().note, "[1,2,3]");
        assert_eq!(denormalize(input).note, "[1,2,3]");
    }

    #[test]
    fn entity_without_json_fields_is_a_no_op() {
        let lookup = Lookup { name: "[]".into() };
        assert_eq!(normalize_all(vec![lookup.clone()]), vec![lookup.clone()]);
        assert!(Lookup::JSON_FIELDS.is_empty());
    }

    #[test]
    fn schema_lists_declared_fields() {
        assert_eq!(Order::JSON_FIELDS, &["permissions", "quotes"]);
    }
}
