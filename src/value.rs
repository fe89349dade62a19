//! Schema-free JSON values decoded from token segments
//!
//! Segments are parsed as general JSON with no claim structure assumed. All
//! numbers are widened to `f64`, whatever literal the issuer wrote, and object
//! keys are held in a `BTreeMap` so iteration is byte-lexicographic.

use std::collections::BTreeMap;
use std::fmt;

/// A decoded JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Borrow the members if this is an object
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Parse raw segment bytes as JSON text
pub fn parse_value(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice::<serde_json::Value>(bytes).map(Value::from)
}

/// Shortest round-trip decimal form, never in exponent notation
pub fn format_number(n: f64) -> String {
    format!("{n}")
}

/// Default textual form
///
/// Top-level strings print raw; strings nested in arrays or objects are
/// JSON-quoted so the compact form stays readable.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => write_compact(f, other),
        }
    }
}

fn write_compact(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => f.write_str(&format_number(*n)),
        Value::String(s) => write!(f, "{}", serde_json::Value::from(s.as_str())),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_compact(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(members) => {
            f.write_str("{")?;
            for (i, (key, item)) in members.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}:", serde_json::Value::from(key.as_str()))?;
                write_compact(f, item)?;
            }
            f.write_str("}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object() {
        let value = parse_value(br#"{"sub":"1234567890","admin":true,"iat":1516239022}"#).unwrap();
        let members = value.as_object().unwrap();

        assert_eq!(members["sub"], Value::String("1234567890".into()));
        assert_eq!(members["admin"], Value::Bool(true));
        assert_eq!(members["iat"], Value::Number(1516239022.0));
    }

    #[test]
    fn test_numbers_widen_to_f64() {
        assert_eq!(parse_value(b"42").unwrap(), Value::Number(42.0));
        assert_eq!(parse_value(b"-7").unwrap(), Value::Number(-7.0));
        assert_eq!(parse_value(b"1.25").unwrap(), Value::Number(1.25));
        assert_eq!(parse_value(b"1e3").unwrap(), Value::Number(1000.0));
    }

    #[test]
    fn test_keys_iterate_sorted() {
        let value = parse_value(br#"{"typ":"JWT","alg":"HS256","Zeta":1,"_x":2}"#).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["Zeta", "_x", "alg", "typ"]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_value(b"").is_err());
        assert!(parse_value(b"not json").is_err());
        assert!(parse_value(br#"{"alg":"HS256""#).is_err());
    }

    #[test]
    fn test_long_fractions_correctly_rounded() {
        let literals = [
            "4583596552.857768615",
            "1516239022.123456789",
            "9999999999.999999999",
            "1000000000.000000001",
            "2.2250738585072011e-308",
            "0.1",
        ];

        for text in literals {
            let expected: f64 = text.parse().unwrap();
            assert_eq!(
                parse_value(text.as_bytes()).unwrap(),
                Value::Number(expected),
                "literal {text}"
            );
        }

        assert_eq!(
            parse_value(b"4583596552.857768615")
                .map(|v| v.to_string())
                .unwrap(),
            "4583596552.857769"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1516239022.0), "1516239022");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(0.0000001), "0.0000001");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::String("John Doe".into()).to_string(), "John Doe");

        let nested = parse_value(br#"{"roles":["admin","dev"],"n":1.5,"x":null}"#).unwrap();
        assert_eq!(
            nested.to_string(),
            r#"{"n":1.5,"roles":["admin","dev"],"x":null}"#
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(parse_value(b"[1,2]").unwrap().kind(), "array");
        assert_eq!(parse_value(b"null").unwrap().kind(), "null");
        assert_eq!(parse_value(b"{}").unwrap().kind(), "object");
    }
}
