use crate::model::{Attributes, Mode, TagRequest, Value};

// Positional convention: content, attributes, mode token. Anything past
// the third position is ignored.
pub fn resolve(args: Vec<Value>) -> TagRequest {
  if args.is_empty() {
    return TagRequest {
      mode: Mode::Start,
      ..TagRequest::default()
    };
  }

  let mut args = args.into_iter();

  TagRequest {
    content: args.next(),
    attributes: args.next().and_then(as_attributes),
    mode: args.next().map(|token| Mode::from(&token)).unwrap_or_default(),
  }
}

fn as_attributes(value: Value) -> Option<Attributes> {
  match value {
    Value::Hash(attributes) => Some(attributes),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn no_arguments_resolves_to_a_bare_start() {
    assert_eq!(
      resolve(vec![]),
      TagRequest {
        content: None,
        attributes: None,
        mode: Mode::Start,
      }
    )
  }

  #[test]
  fn one_argument_is_content_and_wraps() {
    assert_eq!(
      resolve(vec!["hi".into()]),
      TagRequest {
        content: Some("hi".into()),
        attributes: None,
        mode: Mode::Wrap,
      }
    )
  }

  #[test]
  fn two_arguments_add_attributes() {
    assert_eq!(
      resolve(vec!["hi".into(), attrs!(class = "a").into()]),
      TagRequest {
        content: Some("hi".into()),
        attributes: Some(attrs!(class = "a")),
        mode: Mode::Wrap,
      }
    )
  }

  #[test]
  fn three_arguments_add_an_explicit_mode() {
    assert_eq!(
      resolve(vec![Value::Null, Value::Null, "end".into()]),
      TagRequest {
        content: Some(Value::Null),
        attributes: None,
        mode: Mode::End,
      }
    )
  }

  #[test]
  fn excess_arguments_are_ignored() {
    assert_eq!(
      resolve(vec!["hi".into(), Value::Null, "self".into(), "extra".into()]),
      resolve(vec!["hi".into(), Value::Null, "self".into()])
    )
  }

  #[test]
  fn non_mapping_attributes_are_dropped() {
    assert_eq!(resolve(vec!["hi".into(), "nope".into()]).attributes, None);
    assert_eq!(resolve(vec!["hi".into(), 3.into()]).attributes, None);
  }

  #[test]
  fn unrecognized_mode_tokens_wrap() {
    assert_eq!(resolve(vec!["hi".into(), Value::Null, "bogus".into()]).mode, Mode::Wrap);
  }

  #[test]
  fn a_resolved_request_serializes_for_inspection() {
    let request = resolve(vec!["hi".into(), attrs!(class = "a").into(), "self".into()]);
    let json = serde_json::to_string(&request).unwrap();

    assert_eq!(
      json,
      r#"{"content":"hi","attributes":{"class":"a"},"mode":"self"}"#
    );
  }
}
