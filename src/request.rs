use crate::error::GenerateError;
use serde_json::Value;

/// Checked in this order; the first missing or falsy field wins. The third
/// column is the example shown in the error message.
const REQUIRED_FIELDS: [(&str, &str, &str); 5] = [
    (
        "bucket_url",
        "bucket url",
        "\"s3://kfc.kentuky.com/nugget.jpg\"",
    ),
    ("name", "name", "\"example_1\""),
    (
        "hash",
        "hash",
        "\"5683b32d9da3fe83cef1e284dc210e768d02b7cf\"",
    ),
    ("ip", "ip", "\"8.8.8.8\""),
    ("created_at", "created_at", "\"2018-12-25 09:27:53\""),
];

/// The validated top-level payload. Field values are carried as text; no
/// type checking happens beyond presence and truthiness (a free-form
/// `created_at` passes through untouched).
#[derive(Debug, Clone)]
pub struct AnalysisRequest<'a> {
    pub bucket_url: String,
    pub name: String,
    pub hash: String,
    pub ip: String,
    pub created_at: String,
    pub analysis_content: &'a [Value],
}

pub fn validate(content: &Value) -> Result<AnalysisRequest<'_>, GenerateError> {
    let map = match content {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(GenerateError::NoContent),
    };

    for (field, label, example) in REQUIRED_FIELDS {
        if !map.get(field).is_some_and(truthy) {
            return Err(GenerateError::MissingField {
                field,
                label,
                example,
            });
        }
    }

    let analysis_content = match map.get("analysis_content") {
        Some(Value::Array(entries)) => entries.as_slice(),
        _ => {
            return Err(GenerateError::MissingField {
                field: "analysis_content",
                label: "analysis_content",
                example: "[{\"confidence\": 99.18}]",
            })
        }
    };

    Ok(AnalysisRequest {
        bucket_url: text_of(&map["bucket_url"]),
        name: text_of(&map["name"]),
        hash: text_of(&map["hash"]),
        ip: text_of(&map["ip"]),
        created_at: text_of(&map["created_at"]),
        analysis_content,
    })
}

// Python-style truthiness: null, false, 0, "" and empty containers all
// count as absent.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(elements) => !elements.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "bucket_url": "s3://bucket/duck.jpg",
            "name": "duck",
            "hash": "5683b32d9da3fe83cef1e284dc210e768d02b7cf",
            "ip": "8.8.8.8",
            "created_at": "2018-12-25 09:27:53",
            "analysis_content": [{"confidence": 98.5}]
        })
    }

    #[test]
    fn accepts_a_full_payload() {
        let payload = full_payload();
        let request = validate(&payload).unwrap();
        assert_eq!(request.bucket_url, "s3://bucket/duck.jpg");
        assert_eq!(request.analysis_content.len(), 1);
    }

    #[test]
    fn null_and_empty_payloads_are_no_content() {
        assert_eq!(validate(&json!(null)).unwrap_err(), GenerateError::NoContent);
        assert_eq!(validate(&json!({})).unwrap_err(), GenerateError::NoContent);
        assert_eq!(validate(&json!([1])).unwrap_err(), GenerateError::NoContent);
    }

    #[test]
    fn first_missing_field_in_declared_order_wins() {
        let payload = json!({"hash": "h", "ip": "8.8.8.8"});
        let message = validate(&payload).unwrap_err().to_string();
        assert_eq!(
            message,
            "No bucket url given, try to add \"bucket_url\": \"s3://kfc.kentuky.com/nugget.jpg\""
        );
    }

    #[test]
    fn empty_string_fields_count_as_missing() {
        let mut payload = full_payload();
        payload["name"] = json!("");
        let message = validate(&payload).unwrap_err().to_string();
        assert_eq!(message, "No name given, try to add \"name\": \"example_1\"");
    }

    #[test]
    fn hash_is_reported_before_analysis_content() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("hash");
        let message = validate(&payload).unwrap_err().to_string();
        assert!(message.starts_with("No hash given"), "{message}");
    }

    #[test]
    fn analysis_content_must_be_an_array() {
        let mut payload = full_payload();
        payload["analysis_content"] = json!("not a list");
        let message = validate(&payload).unwrap_err().to_string();
        assert_eq!(
            message,
            "No analysis_content given, try to add \"analysis_content\": [{\"confidence\": 99.18}]"
        );
    }

    #[test]
    fn an_empty_analysis_content_list_is_allowed() {
        let mut payload = full_payload();
        payload["analysis_content"] = json!([]);
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn non_string_fields_pass_through_as_text() {
        let mut payload = full_payload();
        payload["name"] = json!(7);
        assert_eq!(validate(&payload).unwrap().name, "7");
    }
}
