use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Canonical identifier shared by dishes and orders.
///
/// Route segments and body `id` fields both go through the constructors here,
/// so comparisons never depend on whether a client sent `"3"` or `3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
#[schema(value_type = String)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    /// Reads an optional identifier out of a JSON payload.
    ///
    /// Null, empty strings, `false` and zero count as "no id supplied".
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self::new(s)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    (i != 0).then(|| Self(i.to_string()))
                } else if let Some(u) = n.as_u64() {
                    Some(Self(u.to_string()))
                } else {
                    let f = n.as_f64()?;
                    if f == 0.0 {
                        None
                    } else if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                        Some(Self((f as i64).to_string()))
                    } else {
                        Some(Self(n.to_string()))
                    }
                }
            }
            Value::Bool(true) => Some(Self("true".to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn route_and_numeric_body_ids_compare_equal() {
        assert_eq!(RecordId::from_json(&json!(42)), Some(RecordId::new("42")));
        assert_eq!(RecordId::from_json(&json!(42.0)), Some(RecordId::new("42")));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(RecordId::new("  abc "), RecordId::new("abc"));
        assert_eq!(RecordId::from_json(&json!(" abc")), Some(RecordId::new("abc")));
    }

    #[test]
    fn empty_values_mean_no_id() {
        assert_eq!(RecordId::from_json(&Value::Null), None);
        assert_eq!(RecordId::from_json(&json!("")), None);
        assert_eq!(RecordId::from_json(&json!("   ")), None);
        assert_eq!(RecordId::from_json(&json!(0)), None);
        assert_eq!(RecordId::from_json(&json!(false)), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::new("d-1");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("d-1"));
        let back: RecordId = serde_json::from_value(json!(" d-1 ")).unwrap();
        assert_eq!(back, id);
    }
}
