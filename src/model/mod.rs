pub mod attrs;
pub mod request;
pub mod value;

pub use attrs::Attributes;
pub use request::{Mode, TagRequest};
pub use value::Value;
