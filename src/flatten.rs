use crate::attribute::{Attribute, AttributeValue};
use crate::error::GenerateError;
use serde_json::{Map, Value};
use tracing::trace;

/// Flattens one analysis-content entry into its attribute rows, in the
/// entry's own key order, depth first. The entry itself must be a JSON
/// object; anything else aborts the whole generation.
pub fn flatten_entry(entry: &Value) -> Result<Vec<Attribute>, GenerateError> {
    let Value::Object(map) = entry else {
        return Err(GenerateError::UnsupportedShape {
            found: json_kind(entry),
        });
    };
    let mut attributes = Vec::new();
    flatten_object(map, "", &mut attributes);
    Ok(attributes)
}

fn flatten_object(map: &Map<String, Value>, prefix: &str, out: &mut Vec<Attribute>) {
    for (key, value) in map {
        flatten_value(&join(prefix, key), value, out);
    }
}

fn flatten_value(path: &str, value: &Value, out: &mut Vec<Attribute>) {
    match value {
        Value::Object(map) => flatten_object(map, path, out),
        Value::Array(elements) => {
            for (index, element) in elements.iter().enumerate() {
                if let Value::Object(map) = element {
                    flatten_object(map, &format!("{path}.{index}"), out);
                } else {
                    // Non-object list elements keep the plain list name: the
                    // index is dropped, so repeated elements collide on `path`.
                    // Consumers of the generated names rely on exactly this.
                    emit(path, element, out);
                }
            }
        }
        leaf => emit(path, leaf, out),
    }
}

fn emit(path: &str, value: &Value, out: &mut Vec<Attribute>) {
    let value = AttributeValue::classify(value);
    trace!(path, value_type = value.type_tag().label(), "leaf");
    out.push(Attribute {
        name: path.to_string(),
        value,
    });
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
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
