
macro_rules! attrs {
  ($($key:ident = $value:expr),+) => {
    $crate::model::Attributes::from([
      $((stringify!($key).into(), $crate::model::Value::from($value)),)+
    ])
  };
}
