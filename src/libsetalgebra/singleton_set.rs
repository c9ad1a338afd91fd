// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Immutable set holding exactly one member.
//!
//! `SingletonSet` is enumerable but not writable: it implements the
//! membership, cardinality and traversal capabilities and deliberately not
//! [`Insert`](crate::ops::Insert) or [`Remove`](crate::ops::Remove), so
//! mutation is rejected at compile time:
//!
//! ```compile_fail
//! use setalgebra::ops::*;
//! use setalgebra::SingletonSet;
//!
//! let mut one = SingletonSet::new(5);
//! one.insert(6);
//! ```

use std::fmt;
use std::fmt::Display;
use std::iter;
use std::marker::PhantomData;

use serde::de::{Error, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ops::*;

#[derive(Clone, Debug)]
pub struct SingletonSet<T> {
  member: T
}

impl<T> SingletonSet<T> {
  pub fn new(member: T) -> SingletonSet<T> {
    SingletonSet { member }
  }

  pub fn member(&self) -> &T {
    &self.member
  }

  pub fn into_member(self) -> T {
    self.member
  }
}

impl<T> Collection for SingletonSet<T> {
  type Item = T;
}

impl<T> Cardinality for SingletonSet<T> {
  type Size = usize;

  fn size(&self) -> usize {
    1
  }
}

impl<T: PartialEq> Contains<T> for SingletonSet<T> {
  fn contains(&self, value: &T) -> bool {
    self.member == *value
  }
}

impl<T> Enumerable for SingletonSet<T> {
  fn for_each_while<F>(&self, mut visit: F) -> bool where
    F: FnMut(&T) -> bool
  {
    visit(&self.member)
  }
}

impl<T> Singleton<T> for SingletonSet<T> {
  fn singleton(value: T) -> SingletonSet<T> {
    SingletonSet::new(value)
  }
}

impl<T: Display> Display for SingletonSet<T> {
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    self.fmt_set(formatter)
  }
}

set_eq_impl!(impl<T: +PartialEq> PartialEq<SingletonSet<T>> for SingletonSet<T>);

impl<T: Eq> Eq for SingletonSet<T> {}

impl<T: Serialize> Serialize for SingletonSet<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    serializer.collect_seq(iter::once(&self.member))
  }
}

impl<'de, T> Deserialize<'de> for SingletonSet<T> where
  T: Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<SingletonSet<T>, D::Error> where
    D: Deserializer<'de>
  {
    struct SeqVisitor<T> {
      marker: PhantomData<T>
    }

    impl<'de, T> Visitor<'de> for SeqVisitor<T> where
      T: Deserialize<'de>
    {
      type Value = SingletonSet<T>;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence holding exactly one member")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<SingletonSet<T>, A::Error> where
        A: SeqAccess<'de>
      {
        let member = match seq.next_element()? {
          Some(member) => member,
          None => return Err(A::Error::invalid_length(0, &self))
        };
        if seq.next_element::<T>()?.is_some() {
          return Err(A::Error::invalid_length(2, &self));
        }
        Ok(SingletonSet::new(member))
      }
    }

    deserializer.deserialize_seq(SeqVisitor { marker: PhantomData })
  }
}
