use super::{Attributes, Value};
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Start,
  End,
  #[serde(rename = "self")]
  SelfClosing,
  Wrap,
}

impl Default for Mode {
  fn default() -> Self {
    Mode::Wrap
  }
}

impl Mode {
  // Unrecognized tokens fall back to Wrap rather than failing.
  pub fn from_token(token: &str) -> Mode {
    match token {
      "start" => Mode::Start,
      "end" => Mode::End,
      "self" => Mode::SelfClosing,
      _ => Mode::Wrap,
    }
  }
}

impl<'a> From<&Value<'a>> for Mode {
  fn from(value: &Value<'a>) -> Mode {
    match value {
      Value::String(token) => Mode::from_token(token),
      _ => Mode::Wrap,
    }
  }
}

#[derive(PartialEq, Clone, Debug, Default, Serialize)]
pub struct TagRequest<'a> {
  pub content: Option<Value<'a>>,
  pub attributes: Option<Attributes<'a>>,
  pub mode: Mode,
}
