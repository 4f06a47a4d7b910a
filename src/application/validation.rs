use serde_json::{Map, Value};

/// A non-blank string field of `data`, or `None`.
pub fn non_empty_str(data: &Value, field: &str) -> Option<String> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// A JSON number that is a whole number greater than zero.
///
/// `2.0` counts as an integer; strings never do.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    if f > 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Copies only `fields` out of `data`, skipping the ones not present.
pub fn narrow(data: &Value, fields: &[&str]) -> Value {
    let mut out = Map::new();
    for field in fields {
        if let Some(value) = data.get(*field) {
            out.insert((*field).to_string(), value.clone());
        }
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_integers() {
        assert_eq!(positive_integer(&json!(10)), Some(10));
        assert_eq!(positive_integer(&json!(2.0)), Some(2));
        assert_eq!(positive_integer(&json!(0)), None);
        assert_eq!(positive_integer(&json!(-5)), None);
        assert_eq!(positive_integer(&json!(2.5)), None);
        assert_eq!(positive_integer(&json!("abc")), None);
        assert_eq!(positive_integer(&json!("10")), None);
        assert_eq!(positive_integer(&Value::Null), None);
        assert_eq!(positive_integer(&json!(18446744073709551616.0)), None);
        assert_eq!(positive_integer(&json!(1e300)), None);
    }

    #[test]
    fn blank_strings_are_missing() {
        let data = json!({ "name": "Pasta", "blank": "  ", "number": 3 });
        assert_eq!(non_empty_str(&data, "name"), Some("Pasta".to_string()));
        assert_eq!(non_empty_str(&data, "blank"), None);
        assert_eq!(non_empty_str(&data, "number"), None);
        assert_eq!(non_empty_str(&data, "absent"), None);
        assert_eq!(non_empty_str(&Value::Null, "name"), None);
    }

    #[test]
    fn narrow_drops_unknown_fields() {
        let data = json!({ "deliverTo": "x", "extra": true });
        assert_eq!(
            narrow(&data, &["deliverTo", "mobileNumber"]),
            json!({ "deliverTo": "x" })
        );
        assert_eq!(narrow(&Value::Null, &["deliverTo"]), json!({}));
    }
}
