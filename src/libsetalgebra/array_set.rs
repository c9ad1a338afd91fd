// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Insertion-ordered set backed by a plain vector.
//!
//! Membership is a linear scan, so every operation is O(n) per element. The
//! upside is that the element type only needs `PartialEq` (no hashing, no
//! ordering) and traversal follows insertion order. Suited to small sets.

use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::slice;
use std::vec;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ops::*;
use crate::singleton_set::SingletonSet;
use crate::string_set::StringSet;

#[derive(Clone, Debug)]
pub struct ArraySet<T> {
  elements: Vec<T>
}

impl<T> ArraySet<T> {
  pub fn new() -> ArraySet<T> {
    ArraySet { elements: vec![] }
  }

  pub fn iter(&self) -> slice::Iter<T> {
    self.elements.iter()
  }
}

impl<T> Default for ArraySet<T> {
  fn default() -> ArraySet<T> {
    ArraySet::new()
  }
}

impl<T> Collection for ArraySet<T> {
  type Item = T;
}

impl<T> Cardinality for ArraySet<T> {
  type Size = usize;

  fn size(&self) -> usize {
    self.elements.len()
  }
}

impl<T: PartialEq> Contains<T> for ArraySet<T> {
  fn contains(&self, value: &T) -> bool {
    self.elements.contains(value)
  }
}

impl<T> Enumerable for ArraySet<T> {
  fn for_each_while<F>(&self, mut visit: F) -> bool where
    F: FnMut(&T) -> bool
  {
    for x in &self.elements {
      if !visit(x) {
        return false;
      }
    }
    true
  }
}

impl<T: PartialEq> Insert<T> for ArraySet<T> {
  fn insert(&mut self, value: T) -> bool {
    if self.elements.contains(&value) {
      false
    }
    else {
      self.elements.push(value);
      true
    }
  }
}

impl<T: PartialEq> Remove<T> for ArraySet<T> {
  fn remove(&mut self, value: &T) -> bool {
    match self.elements.iter().position(|x| x == value) {
      Some(index) => {
        self.elements.remove(index);
        true
      }
      None => false
    }
  }
}

impl<T> Empty for ArraySet<T> {
  fn empty() -> ArraySet<T> {
    ArraySet::new()
  }
}

impl<T> Singleton<T> for ArraySet<T> {
  fn singleton(value: T) -> ArraySet<T> {
    ArraySet { elements: vec![value] }
  }
}

impl<T: PartialEq> Extend<T> for ArraySet<T> {
  fn extend<I>(&mut self, iterable: I) where
    I: IntoIterator<Item = T>
  {
    for value in iterable {
      self.insert(value);
    }
  }
}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
  fn from_iter<I>(iterable: I) -> ArraySet<T> where
    I: IntoIterator<Item = T>
  {
    let mut set = ArraySet::new();
    set.extend(iterable);
    set
  }
}

// Duplicates in the source vector are dropped, keeping first occurrences.
impl<T: PartialEq> From<Vec<T>> for ArraySet<T> {
  fn from(elements: Vec<T>) -> ArraySet<T> {
    elements.into_iter().collect()
  }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for ArraySet<T> {
  fn from(elements: [T; N]) -> ArraySet<T> {
    IntoIterator::into_iter(elements).collect()
  }
}

impl<T> IntoIterator for ArraySet<T> {
  type Item = T;
  type IntoIter = vec::IntoIter<T>;

  fn into_iter(self) -> vec::IntoIter<T> {
    self.elements.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> slice::Iter<'a, T> {
    self.elements.iter()
  }
}

impl<T: Display> Display for ArraySet<T> {
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    self.fmt_set(formatter)
  }
}

set_eq_impl!(impl<T: +PartialEq> PartialEq<ArraySet<T>> for ArraySet<T>);
set_eq_impl!(impl<T: +PartialEq> PartialEq<SingletonSet<T>> for ArraySet<T>);
set_eq_impl!(impl<T: +PartialEq> PartialEq<ArraySet<T>> for SingletonSet<T>);
set_eq_impl!(impl PartialEq<StringSet> for ArraySet<String>);
set_eq_impl!(impl PartialEq<ArraySet<String>> for StringSet);

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: Serialize> Serialize for ArraySet<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    serializer.collect_seq(&self.elements)
  }
}

impl<'de, T> Deserialize<'de> for ArraySet<T> where
  T: Deserialize<'de> + PartialEq
{
  fn deserialize<D>(deserializer: D) -> Result<ArraySet<T>, D::Error> where
    D: Deserializer<'de>
  {
    struct SeqVisitor<T> {
      marker: PhantomData<T>
    }

    impl<'de, T> Visitor<'de> for SeqVisitor<T> where
      T: Deserialize<'de> + PartialEq
    {
      type Value = ArraySet<T>;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<ArraySet<T>, A::Error> where
        A: SeqAccess<'de>
      {
        let mut set = ArraySet::new();
        while let Some(value) = seq.next_element()? {
          set.insert(value);
        }
        Ok(set)
      }
    }

    deserializer.deserialize_seq(SeqVisitor { marker: PhantomData })
  }
}
