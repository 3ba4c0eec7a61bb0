use super::Value;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

// Attribute order is part of the rendered output, and a name may appear
// more than once. A pair list carries both; the map-flavored helpers keep
// call sites reading like the hash they replace.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct Attributes<'a>(Vec<(Cow<'a, str>, Value<'a>)>);

impl<'a> Attributes<'a> {
  pub fn new() -> Attributes<'a> {
    Attributes(Vec::new())
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&Value<'a>> {
    self
      .0
      .iter()
      .find(|(name, _)| name.as_ref() == key)
      .map(|(_, value)| value)
  }

  // Replaces an existing entry in place, keeping its position.
  pub fn insert(&mut self, key: Cow<'a, str>, value: Value<'a>) -> Option<Value<'a>> {
    match self.0.iter().position(|(name, _)| *name == key) {
      Some(index) => Some(std::mem::replace(&mut self.0[index].1, value)),
      None => {
        self.0.push((key, value));
        None
      }
    }
  }

  // Appends without looking for an existing entry; repeated names render
  // once per occurrence.
  pub fn push(&mut self, key: Cow<'a, str>, value: Value<'a>) {
    self.0.push((key, value));
  }

  // Overlay: existing names are overwritten where they stand, new names
  // are appended in order.
  pub fn merge(&mut self, other: Attributes<'a>) {
    for (key, value) in other {
      self.insert(key, value);
    }
  }

  pub fn iter(&self) -> std::slice::Iter<(Cow<'a, str>, Value<'a>)> {
    self.0.iter()
  }
}

impl<'a> FromIterator<(Cow<'a, str>, Value<'a>)> for Attributes<'a> {
  fn from_iter<I: IntoIterator<Item = (Cow<'a, str>, Value<'a>)>>(iter: I) -> Attributes<'a> {
    Attributes(iter.into_iter().collect())
  }
}

impl<'a> Extend<(Cow<'a, str>, Value<'a>)> for Attributes<'a> {
  fn extend<I: IntoIterator<Item = (Cow<'a, str>, Value<'a>)>>(&mut self, iter: I) {
    self.0.extend(iter)
  }
}

impl<'a, const N: usize> From<[(Cow<'a, str>, Value<'a>); N]> for Attributes<'a> {
  fn from(entries: [(Cow<'a, str>, Value<'a>); N]) -> Attributes<'a> {
    Attributes(entries.into())
  }
}

impl<'a> IntoIterator for Attributes<'a> {
  type Item = (Cow<'a, str>, Value<'a>);
  type IntoIter = std::vec::IntoIter<Self::Item>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a, 'b> IntoIterator for &'b Attributes<'a> {
  type Item = &'b (Cow<'a, str>, Value<'a>);
  type IntoIter = std::slice::Iter<'b, (Cow<'a, str>, Value<'a>)>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl<'a> Serialize for Attributes<'a> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(self.0.len()))?;

    for (key, value) in &self.0 {
      map.serialize_entry(key, value)?;
    }

    map.end()
  }
}
