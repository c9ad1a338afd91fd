// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set of strings with O(1) expected membership, backed by a hash table.
//! Traversal order is the table's own and must not be relied upon.

use std::collections::hash_set;
use std::collections::HashSet as StdHashSet;
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ops::*;

#[derive(Clone, Debug, Default)]
pub struct StringSet {
  strings: StdHashSet<String>
}

impl StringSet {
  pub fn new() -> StringSet {
    StringSet { strings: StdHashSet::new() }
  }

  pub fn wrap(strings: StdHashSet<String>) -> StringSet {
    StringSet { strings }
  }

  pub fn iter(&self) -> hash_set::Iter<String> {
    self.strings.iter()
  }
}

impl Collection for StringSet {
  type Item = String;
}

impl Cardinality for StringSet {
  type Size = usize;

  fn size(&self) -> usize {
    self.strings.len()
  }
}

impl Contains<String> for StringSet {
  fn contains(&self, value: &String) -> bool {
    self.strings.contains(value)
  }
}

// Borrowed lookups, so callers are not forced to allocate a `String`.
impl Contains<str> for StringSet {
  fn contains(&self, value: &str) -> bool {
    self.strings.contains(value)
  }
}

impl Enumerable for StringSet {
  fn for_each_while<F>(&self, mut visit: F) -> bool where
    F: FnMut(&String) -> bool
  {
    for x in &self.strings {
      if !visit(x) {
        return false;
      }
    }
    true
  }
}

impl Insert<String> for StringSet {
  fn insert(&mut self, value: String) -> bool {
    self.strings.insert(value)
  }
}

impl Remove<String> for StringSet {
  fn remove(&mut self, value: &String) -> bool {
    self.strings.remove(value)
  }
}

impl Remove<str> for StringSet {
  fn remove(&mut self, value: &str) -> bool {
    self.strings.remove(value)
  }
}

impl Empty for StringSet {
  fn empty() -> StringSet {
    StringSet::new()
  }
}

impl Singleton<String> for StringSet {
  fn singleton(value: String) -> StringSet {
    let mut set = StringSet::new();
    set.insert(value);
    set
  }
}

impl<'a> Singleton<&'a str> for StringSet {
  fn singleton(value: &'a str) -> StringSet {
    Singleton::singleton(String::from(value))
  }
}

impl Extend<String> for StringSet {
  fn extend<I>(&mut self, iterable: I) where
    I: IntoIterator<Item = String>
  {
    self.strings.extend(iterable);
  }
}

impl<'a> Extend<&'a str> for StringSet {
  fn extend<I>(&mut self, iterable: I) where
    I: IntoIterator<Item = &'a str>
  {
    self.strings.extend(iterable.into_iter().map(String::from));
  }
}

impl FromIterator<String> for StringSet {
  fn from_iter<I>(iterable: I) -> StringSet where
    I: IntoIterator<Item = String>
  {
    StringSet::wrap(iterable.into_iter().collect())
  }
}

impl<'a> FromIterator<&'a str> for StringSet {
  fn from_iter<I>(iterable: I) -> StringSet where
    I: IntoIterator<Item = &'a str>
  {
    iterable.into_iter().map(String::from).collect()
  }
}

impl IntoIterator for StringSet {
  type Item = String;
  type IntoIter = hash_set::IntoIter<String>;

  fn into_iter(self) -> hash_set::IntoIter<String> {
    self.strings.into_iter()
  }
}

impl<'a> IntoIterator for &'a StringSet {
  type Item = &'a String;
  type IntoIter = hash_set::Iter<'a, String>;

  fn into_iter(self) -> hash_set::Iter<'a, String> {
    self.strings.iter()
  }
}

impl Display for StringSet {
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    self.fmt_set(formatter)
  }
}

set_eq_impl!(impl PartialEq<StringSet> for StringSet);

impl Eq for StringSet {}

impl Serialize for StringSet {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    serializer.collect_seq(&self.strings)
  }
}

impl<'de> Deserialize<'de> for StringSet {
  fn deserialize<D>(deserializer: D) -> Result<StringSet, D::Error> where
    D: Deserializer<'de>
  {
    struct SeqVisitor;

    impl<'de> Visitor<'de> for SeqVisitor {
      type Value = StringSet;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of strings")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<StringSet, A::Error> where
        A: SeqAccess<'de>
      {
        let mut set = StringSet::new();
        while let Some(value) = seq.next_element()? {
          set.insert(value);
        }
        Ok(set)
      }
    }

    deserializer.deserialize_seq(SeqVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  #[test]
  fn size_scenario() {
    let mut set: StringSet = vec!["a", "b"].into_iter().collect();
    assert_eq!(set.size(), 2);

    assert!(!set.insert(String::from("a")));
    assert_eq!(set.size(), 2);

    assert!(!set.remove("c"));
    assert_eq!(set.size(), 2);

    assert!(set.remove("a"));
    assert_eq!(set.size(), 1);
  }

  #[test]
  fn borrowed_lookups() {
    let set: StringSet = vec!["north", "south"].into_iter().collect();
    assert!(set.contains("north"));
    assert!(!set.contains("east"));
    assert!(set.contains(&String::from("south")));
  }

  #[test]
  fn traversal_is_exhaustive_and_duplicate_free() {
    let set: StringSet = vec!["a", "b", "c", "a"].into_iter().collect();
    let mut seen = set.to_vec();
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c"]);
    assert_eq!(set.size(), 3);
  }

  #[test]
  fn equality_with_array_set() {
    use crate::array_set::ArraySet;

    let hashed: StringSet = vec!["a", "b"].into_iter().collect();
    let scanned: ArraySet<String> =
      vec!["b", "a"].into_iter().map(String::from).collect();
    assert!(hashed == scanned);
    assert!(scanned == hashed);
  }

  #[test]
  fn display_test() {
    let set: StringSet = Singleton::singleton("only");
    assert_eq!(set.to_string(), "{only}");
    assert_eq!(StringSet::new().to_string(), "{}");
  }

  #[test]
  fn serde_round_trip() {
    let set: StringSet = Singleton::singleton("a");
    assert_tokens(&set, &[
      Token::Seq { len: Some(1) },
      Token::Str("a"),
      Token::SeqEnd,
    ]);
  }
}
