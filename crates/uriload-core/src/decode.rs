//! Decoding fetched content into a structured object.
//!
//! One YAML parser handles both YAML and JSON text, since JSON is a subset
//! of YAML syntax.

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::DecodeError;

/// The structured result of a load: a YAML/JSON mapping.
pub type Object = Mapping;

/// Raw input to [`decode_object`].
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Already structured; passes through if it is a mapping.
    Structured(Value),
    /// Byte buffer, interpreted as UTF-8 text.
    Bytes(Vec<u8>),
    /// YAML or JSON text.
    Text(String),
}

impl From<Mapping> for Content {
    fn from(m: Mapping) -> Self {
        Content::Structured(Value::Mapping(m))
    }
}

impl From<Value> for Content {
    fn from(v: Value) -> Self {
        Content::Structured(v)
    }
}

impl From<Vec<u8>> for Content {
    fn from(b: Vec<u8>) -> Self {
        Content::Bytes(b)
    }
}

impl From<&[u8]> for Content {
    fn from(b: &[u8]) -> Self {
        Content::Bytes(b.to_vec())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

/// Decodes content into a mapping.
///
/// Mappings are returned unchanged, bytes are read as UTF-8, and text is
/// parsed as YAML. Any other structured value fails with
/// [`DecodeError::Unsupported`].
pub fn decode_object(data: impl Into<Content>) -> Result<Object, DecodeError> {
    let text = match data.into() {
        Content::Structured(Value::Mapping(m)) => return Ok(m),
        Content::Structured(other) => {
            return Err(DecodeError::Unsupported {
                found: kind_of(&other),
            })
        }
        Content::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => return Err(DecodeError::Utf8(e.utf8_error())),
        },
        Content::Text(s) => s,
    };

    match serde_yaml::from_str::<Value>(&text).map_err(DecodeError::Yaml)? {
        Value::Mapping(m) => Ok(m),
        other => Err(DecodeError::NotAMapping {
            found: kind_of(&other),
        }),
    }
}

/// Deserializes a decoded mapping into a typed value.
pub fn decode_as<T: DeserializeOwned>(object: Object) -> Result<T, DecodeError> {
    serde_yaml::from_value(Value::Mapping(object)).map_err(DecodeError::Typed)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
