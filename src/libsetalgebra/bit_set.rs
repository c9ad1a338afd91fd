// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set of small `usize` elements backed by a bit vector. Traversal runs in
//! ascending element order.

use bit_set::BitSet as StdBitSet;
use std::fmt;
use std::iter::FromIterator;

use crate::ops::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSet {
  bits: StdBitSet
}

impl BitSet {
  pub fn new() -> BitSet {
    BitSet { bits: StdBitSet::new() }
  }

  pub fn wrap(bits: StdBitSet) -> BitSet {
    BitSet { bits }
  }
}

impl Collection for BitSet {
  type Item = usize;
}

impl Cardinality for BitSet {
  type Size = usize;

  fn size(&self) -> usize {
    self.bits.len()
  }
}

impl Contains<usize> for BitSet {
  fn contains(&self, value: &usize) -> bool {
    self.bits.contains(*value)
  }
}

impl Enumerable for BitSet {
  fn for_each_while<F>(&self, mut visit: F) -> bool where
    F: FnMut(&usize) -> bool
  {
    for x in self.bits.iter() {
      if !visit(&x) {
        return false;
      }
    }
    true
  }
}

impl Insert<usize> for BitSet {
  fn insert(&mut self, value: usize) -> bool {
    self.bits.insert(value)
  }
}

impl Remove<usize> for BitSet {
  fn remove(&mut self, value: &usize) -> bool {
    self.bits.remove(*value)
  }
}

impl Empty for BitSet {
  fn empty() -> BitSet {
    BitSet::new()
  }
}

impl Singleton<usize> for BitSet {
  fn singleton(value: usize) -> BitSet {
    let mut set = BitSet::new();
    set.insert(value);
    set
  }
}

impl Extend<usize> for BitSet {
  fn extend<I>(&mut self, iterable: I) where
    I: IntoIterator<Item = usize>
  {
    for value in iterable {
      self.insert(value);
    }
  }
}

impl FromIterator<usize> for BitSet {
  fn from_iter<I>(iterable: I) -> BitSet where
    I: IntoIterator<Item = usize>
  {
    let mut set = BitSet::new();
    set.extend(iterable);
    set
  }
}

impl fmt::Display for BitSet {
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    self.fmt_set(formatter)
  }
}

set_eq_impl!(impl PartialEq<crate::array_set::ArraySet<usize>> for BitSet);
set_eq_impl!(impl PartialEq<BitSet> for crate::array_set::ArraySet<usize>);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::array_set::ArraySet;

  #[test]
  fn insert_contains_remove_round_trip() {
    let mut set = BitSet::new();
    assert!(set.insert(40));
    assert!(set.contains(&40));
    assert!(!set.insert(40));
    assert!(set.remove(&40));
    assert!(!set.contains(&40));
    assert!(!set.remove(&40));
  }

  #[test]
  fn traversal_is_ascending() {
    let set: BitSet = vec![9usize, 1, 4].into_iter().collect();
    assert_eq!(set.to_vec(), vec![1, 4, 9]);
    assert_eq!(set.to_string(), "{1, 4, 9}");
  }

  #[test]
  fn equality_with_array_set() {
    let bits: BitSet = vec![1usize, 2, 3].into_iter().collect();
    assert!(bits == ArraySet::from(vec![3usize, 1, 2]));
    assert!(ArraySet::from(vec![1usize, 2]) != bits);
  }

  #[test]
  fn size_matches_traversal() {
    let set: BitSet = vec![0usize, 5, 63, 64].into_iter().collect();
    assert_eq!(set.size(), set.to_vec().len());
  }
}
