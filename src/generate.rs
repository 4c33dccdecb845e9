use crate::attribute::AttributeValue;
use crate::error::GenerateError;
use crate::flatten::flatten_entry;
use crate::request::validate;
use crate::sql::{insert_into, set_var, SqlValue};
use serde_json::Value;
use tracing::{debug, info};

/// Turns one image-analysis payload into a flat sequence of terminated SQL
/// statements, chained through `@IMAGE`/`@ANALYSIS`/`@OBJECT` session
/// variables. All-or-nothing: any validation or flattening failure returns
/// the error and no SQL at all.
#[tracing::instrument(skip(content))]
pub fn generate_sql(content: &Value) -> Result<String, GenerateError> {
    let request = validate(content)?;

    // Flatten every entry before emitting anything, so a bad entry can
    // never leave a partial statement sequence behind.
    let mut objects = Vec::with_capacity(request.analysis_content.len());
    for entry in request.analysis_content {
        objects.push(flatten_entry(entry)?);
    }

    let mut sql = String::new();
    sql.push_str(&insert_into(
        "image",
        &["url", "name", "hash"],
        &[
            SqlValue::text(request.bucket_url),
            SqlValue::text(request.name),
            SqlValue::text(request.hash),
        ],
    ));
    sql.push_str(&set_var("IMAGE"));

    sql.push_str(&insert_into(
        "analysis",
        &["image_id", "ip", "created_at", "updated_at"],
        &[
            SqlValue::Var("IMAGE"),
            SqlValue::Func {
                name: "INET_ATON",
                args: vec![SqlValue::text(request.ip)],
            },
            SqlValue::text(request.created_at),
            SqlValue::Func {
                name: "NOW",
                args: vec![],
            },
        ],
    ));
    sql.push_str(&set_var("ANALYSIS"));

    for attributes in &objects {
        sql.push_str(&insert_into(
            "object",
            &["analysis_id", "name", "category"],
            &[
                SqlValue::Var("ANALYSIS"),
                SqlValue::text("face_object"),
                SqlValue::text("face"),
            ],
        ));
        sql.push_str(&set_var("OBJECT"));

        debug!(attributes = attributes.len(), "emitting object");
        for attribute in attributes {
            let [value_string, value_number, value_boolean] = value_columns(&attribute.value);
            sql.push_str(&insert_into(
                "attribute",
                &[
                    "object_id",
                    "name",
                    "value_type",
                    "value_string",
                    "value_number",
                    "value_boolean",
                ],
                &[
                    SqlValue::Var("OBJECT"),
                    SqlValue::text(&attribute.name),
                    SqlValue::text(attribute.value.type_tag().label()),
                    value_string,
                    value_number,
                    value_boolean,
                ],
            ));
        }
    }

    info!(objects = objects.len(), bytes = sql.len(), "generated");
    Ok(sql)
}

// Exactly one slot is non-NULL, picked by the variant; `None` leaves all
// three NULL.
fn value_columns(value: &AttributeValue) -> [SqlValue; 3] {
    match value {
        AttributeValue::Str(s) => [SqlValue::text(s), SqlValue::Null, SqlValue::Null],
        AttributeValue::Num(n) => [SqlValue::Null, SqlValue::text(n.to_string()), SqlValue::Null],
        AttributeValue::Bool(b) => [SqlValue::Null, SqlValue::Null, SqlValue::text(b.to_string())],
        AttributeValue::None => [SqlValue::Null, SqlValue::Null, SqlValue::Null],
    }
}
