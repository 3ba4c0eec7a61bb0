use serde_json;
use tagsmith::dispatch;
use tagsmith::model::Value;
use tagsmith::resolve;
use wasm_bindgen::prelude::*;

fn parse_args(input: &str) -> Vec<Value<'static>> {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(serde_json::Value::Array(items)) => items.into_iter().map(Value::from).collect(),
        Ok(value) => vec![Value::from(value)],
        Err(_) => vec![],
    }
}

#[wasm_bindgen]
pub fn render(name: &str, args: &str) -> String {
    dispatch::render(name, parse_args(args))
}

#[wasm_bindgen]
pub fn resolve(args: &str) -> String {
    serde_json::to_string(&resolve::resolve(parse_args(args))).unwrap()
}
