use crate::model::{Attributes, Mode, TagRequest, Value};
use crate::render;
use crate::resolve::resolve;

pub fn render(name: &str, args: Vec<Value>) -> String {
  render_request(name, resolve(args))
}

pub fn render_request(name: &str, request: TagRequest) -> String {
  let TagRequest {
    content,
    attributes,
    mode,
  } = request;

  // Sequence content renders the tag once per element, same attributes
  // and mode each time. One level only; an array inside an element is
  // opaque content.
  if let Some(Value::Array(items)) = content {
    return items
      .into_iter()
      .map(|item| render_one(name, Some(&item), attributes.as_ref(), mode))
      .collect();
  }

  render_one(name, content.as_ref(), attributes.as_ref(), mode)
}

fn render_one(name: &str, content: Option<&Value>, attributes: Option<&Attributes>, mode: Mode) -> String {
  match mode {
    // The start form never carries attributes, supplied or not.
    Mode::Start => render::open(name, None),
    Mode::End => render::close(name),
    Mode::SelfClosing => render::self_closing(name, attributes),
    Mode::Wrap => {
      let mut output = render::open(name, attributes);

      if let Some(content) = content {
        output.push_str(&content.to_string());
      }

      output.push_str(&render::close(name));
      output
    }
  }
}
