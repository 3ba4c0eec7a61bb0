use super::Attributes;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

#[derive(PartialEq, Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Value<'a> {
  Hash(Attributes<'a>),
  Array(Vec<Value<'a>>),
  String(Cow<'a, str>),
  Number(f64),
  Boolean(bool),
  Null,
}

impl<'a> From<&'a str> for Value<'a> {
  fn from(value: &'a str) -> Value<'a> {
    Value::String(value.into())
  }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
  fn from(value: Cow<'a, str>) -> Value<'a> {
    Value::String(value)
  }
}

impl<'a> From<String> for Value<'a> {
  fn from(value: String) -> Value<'a> {
    Value::String(value.into())
  }
}

impl<'a> From<bool> for Value<'a> {
  fn from(value: bool) -> Value<'a> {
    Value::Boolean(value)
  }
}

impl<'a> From<i32> for Value<'a> {
  fn from(value: i32) -> Value<'a> {
    Value::Number(value.into())
  }
}

impl<'a> From<f64> for Value<'a> {
  fn from(value: f64) -> Value<'a> {
    Value::Number(value)
  }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
  fn from(value: Vec<Value>) -> Value {
    Value::Array(value)
  }
}

impl<'a> From<Attributes<'a>> for Value<'a> {
  fn from(value: Attributes) -> Value {
    Value::Hash(value)
  }
}

impl<'a> From<serde_json::Value> for Value<'a> {
  fn from(value: serde_json::Value) -> Value<'a> {
    match value {
      serde_json::Value::Null => Value::Null,
      serde_json::Value::Bool(value) => Value::Boolean(value),
      serde_json::Value::Number(value) => value.as_f64().map(Value::Number).unwrap_or(Value::Null),
      serde_json::Value::String(value) => Value::String(value.into()),
      serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
      serde_json::Value::Object(entries) => Value::Hash(
        entries
          .into_iter()
          .map(|(key, value)| (key.into(), Value::from(value)))
          .collect(),
      ),
    }
  }
}

impl<'a> fmt::Display for Value<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::String(value) => write!(f, "{}", value),
      Value::Number(value) => write!(f, "{}", value),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::Null => Ok(()),
      _ => write!(f, "[OBJECT]"),
    }
  }
}
