use serde_json::Value;

use crate::domain::entities::row::Row;

pub fn decode_rows(bytes: &[u8]) -> Result<Vec<Row>, String> {
    let text = std::str::from_utf8(bytes).map_err(|err| format!("not valid UTF-8: {err}"))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let value: Value =
        serde_json::from_str(text).map_err(|err| format!("invalid JSON: {err}"))?;
    let Value::Array(items) = value else {
        return Err(format!(
            "expected a JSON array of objects, found {}",
            value_kind(&value)
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(fields) => Ok(Row::new(fields)),
            other => Err(format!(
                "element {idx} is {}, expected an object",
                value_kind(&other)
            )),
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
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
    fn decode_rows_keeps_unknown_keys_and_order() {
        let rows = decode_rows(br#"[{"title":"A","extra":1},{"title":"B","field1":"x"}]"#)
            .expect("should decode");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title(), Some("A"));
        assert_eq!(rows[0].display_value("extra"), "1");
        assert_eq!(rows[1].display_value("field1"), "x");
    }

    #[test]
    fn decode_rows_accepts_missing_title() {
        let rows = decode_rows(br#"[{"field2":null}]"#).expect("should decode");

        assert_eq!(rows[0].title(), None);
    }

    #[test]
    fn decode_rows_rejects_non_array_and_non_object_elements() {
        let err = decode_rows(br#"{"title":"A"}"#).expect_err("object should be rejected");
        assert!(err.contains("expected a JSON array"), "{err}");

        let err = decode_rows(br#"[{"title":"A"}, 3]"#).expect_err("number should be rejected");
        assert!(err.contains("element 1"), "{err}");
    }

    #[test]
    fn decode_rows_strips_byte_order_mark() {
        let rows = decode_rows("\u{feff}[]".as_bytes()).expect("should decode");

        assert!(rows.is_empty());
    }
}
