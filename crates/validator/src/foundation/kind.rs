//! Type tags for dynamically typed argument values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The declared type a [`Schema`](crate::Schema) can require of a value.
///
/// `Integer` and `Float` follow how `serde_json` stores a number: `2` is an
/// integer, `2.0` is a float. `Number` accepts either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// `true` / `false`.
    #[serde(alias = "boolean")]
    Bool,
    /// A number stored as `i64` or `u64`.
    #[serde(alias = "int")]
    Integer,
    /// A number stored as `f64`.
    Float,
    /// Any number.
    Number,
    /// A string.
    #[serde(alias = "str")]
    String,
    /// An array.
    #[serde(alias = "list")]
    Array,
    /// An object.
    #[serde(alias = "dict")]
    Object,
}

impl ValueKind {
    /// Returns the concrete kind of `value`.
    ///
    /// Never returns [`ValueKind::Number`]; numbers resolve to `Integer` or `Float`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns true if `value` conforms to this kind.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Number => value.is_number(),
            kind => kind == Self::of(value),
        }
    }

    /// Lowercase name, as used in schema files and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), ValueKind::Null)]
    #[case(json!(true), ValueKind::Bool)]
    #[case(json!(2), ValueKind::Integer)]
    #[case(json!(u64::MAX), ValueKind::Integer)]
    #[case(json!(2.0), ValueKind::Float)]
    #[case(json!("chrX"), ValueKind::String)]
    #[case(json!([1, 2]), ValueKind::Array)]
    #[case(json!({"a": 1}), ValueKind::Object)]
    fn kind_of_value(#[case] value: Value, #[case] expected: ValueKind) {
        assert_eq!(ValueKind::of(&value), expected);
    }

    #[test]
    fn number_accepts_integers_and_floats() {
        assert!(ValueKind::Number.accepts(&json!(1)));
        assert!(ValueKind::Number.accepts(&json!(1.5)));
        assert!(!ValueKind::Number.accepts(&json!("1")));
    }

    #[test]
    fn integer_rejects_float_representation() {
        assert!(ValueKind::Integer.accepts(&json!(3)));
        assert!(!ValueKind::Integer.accepts(&json!(3.0)));
        assert!(ValueKind::Float.accepts(&json!(3.0)));
    }

    #[test]
    fn booleans_are_not_numbers() {
        assert!(!ValueKind::Integer.accepts(&json!(true)));
        assert!(!ValueKind::Number.accepts(&json!(false)));
        assert!(ValueKind::Bool.accepts(&json!(true)));
    }

    #[test]
    fn deserializes_aliases() {
        let kinds: Vec<ValueKind> =
            serde_json::from_value(json!(["int", "str", "boolean", "list", "dict", "float"]))
                .unwrap();
        assert_eq!(
            kinds,
            vec![
                ValueKind::Integer,
                ValueKind::String,
                ValueKind::Bool,
                ValueKind::Array,
                ValueKind::Object,
                ValueKind::Float,
            ]
        );
    }
}
