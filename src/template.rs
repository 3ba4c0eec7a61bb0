use crate::dispatch::render;
use crate::model::{Attributes, Value};

// Caller attributes keep their positions; the form attributes win on
// conflicting names and are appended otherwise.
pub fn form<'a>(
  name: &'a str,
  action: &'a str,
  method: &'a str,
  content: Value<'a>,
  extra: Option<Attributes<'a>>,
) -> String {
  let form_attributes = attrs!(name = name, action = action, method = method);

  let attributes = match extra {
    Some(mut extra) => {
      extra.merge(form_attributes);
      extra
    }
    None => form_attributes,
  };

  render("form", vec![content, attributes.into()])
}

pub fn script<'a>(file: &'a str, inline: &'a str) -> String {
  let attributes = Attributes::from([
    ("type".into(), "text/javascript".into()),
    ("src".into(), file.into()),
  ]);

  render("script", vec![inline.into(), attributes.into()])
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn form_builds_its_attribute_set() {
    assert_eq!(
      form("login", "/login", "post", "fields".into(), None),
      r#"<form name="login" action="/login" method="post" >fields</form>"#
    );
  }

  #[test]
  fn caller_attributes_come_first_but_never_win() {
    assert_eq!(
      form(
        "login",
        "/login",
        "post",
        "fields".into(),
        Some(attrs!(class = "wide", method = "get"))
      ),
      r#"<form class="wide" method="post" name="login" action="/login" >fields</form>"#
    );
  }

  #[test]
  fn script_wraps_the_inline_source() {
    assert_eq!(
      script("app.js", "init();"),
      r#"<script type="text/javascript" src="app.js" >init();</script>"#
    );
  }

  #[test]
  fn script_without_inline_source_renders_an_empty_pair() {
    assert_eq!(
      script("app.js", ""),
      r#"<script type="text/javascript" src="app.js" ></script>"#
    );
  }
}
