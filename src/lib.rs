#[macro_use]
pub mod macros;
pub mod dispatch;
pub mod model;
pub mod render;
pub mod resolve;
pub mod template;
