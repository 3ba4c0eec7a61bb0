use crate::model::{Attributes, Value};

// The space between the name and the attribute string is always emitted,
// even when the attributes render empty: `<div >`.
pub fn open(name: &str, attributes: Option<&Attributes>) -> String {
  format!("<{} {}>", name, self::attributes(attributes))
}

pub fn close(name: &str) -> String {
  format!("</{}>", name)
}

pub fn self_closing(name: &str, attributes: Option<&Attributes>) -> String {
  format!("<{} {}/>", name, self::attributes(attributes))
}

// Entries render in insertion order as `name="value" `, one trailing
// space each, no escaping. An entry is skipped only when its value is
// null or stringifies empty; values are otherwise emitted verbatim, so a
// numeric zero survives.
pub fn attributes(attributes: Option<&Attributes>) -> String {
  let mut output = String::new();

  if let Some(attributes) = attributes {
    for (key, value) in attributes {
      if let Value::Null = value {
        continue;
      }

      let text = value.to_string();

      if text.is_empty() {
        continue;
      }

      output.push_str(&format!("{}=\"{}\" ", key, text));
    }
  }

  output
}
