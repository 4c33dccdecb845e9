use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
    Boolean,
    None,
}

impl AttributeType {
    /// Label stored in the `value_type` column.
    pub fn label(self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Boolean => "boolean",
            AttributeType::None => "none",
        }
    }
}

/// A flattened leaf value. Booleans are their own case and never fold into
/// `Num`; anything that is not a scalar degrades to `None`, so
/// classification is total.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Str(String),
    Num(Number),
    Bool(bool),
    None,
}

impl AttributeValue {
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::String(s) => AttributeValue::Str(s.clone()),
            Value::Number(n) => AttributeValue::Num(n.clone()),
            Value::Bool(b) => AttributeValue::Bool(*b),
            _ => AttributeValue::None,
        }
    }

    pub fn type_tag(&self) -> AttributeType {
        match self {
            AttributeValue::Str(_) => AttributeType::String,
            AttributeValue::Num(_) => AttributeType::Number,
            AttributeValue::Bool(_) => AttributeType::Boolean,
            AttributeValue::None => AttributeType::None,
        }
    }
}

/// One `(name, typed value)` row destined for the `attribute` table. The
/// name is the dotted path of the leaf inside the analysed object.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classification_is_total() {
        let cases = [
            (json!("x"), AttributeType::String),
            (json!(3), AttributeType::Number),
            (json!(3.5), AttributeType::Number),
            (json!(true), AttributeType::Boolean),
            (json!(null), AttributeType::None),
            (json!({}), AttributeType::None),
            (json!([1, 2]), AttributeType::None),
        ];
        for (value, expected) in cases {
            assert_eq!(AttributeValue::classify(&value).type_tag(), expected);
        }
    }

    #[test]
    fn boolean_is_not_a_number() {
        assert_eq!(
            AttributeValue::classify(&json!(false)),
            AttributeValue::Bool(false)
        );
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(AttributeType::String.label(), "string");
        assert_eq!(AttributeType::Number.label(), "number");
        assert_eq!(AttributeType::Boolean.label(), "boolean");
        assert_eq!(AttributeType::None.label(), "none");
    }
}
