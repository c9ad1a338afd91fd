// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Complement of a set: everything the underlying set does not contain.
//!
//! `NotSet` holds a shared handle on the underlying set and answers
//! membership by negating a fresh query each time; it carries no state of
//! its own. Because the complement of a finite set ranges over an unbounded
//! universe, `NotSet` implements the membership capability only. Asking for
//! its size or traversing it is rejected at compile time:
//!
//! ```compile_fail
//! use setalgebra::ops::*;
//! use setalgebra::{ArraySet, NotSet};
//!
//! let odd = NotSet::of(ArraySet::from(vec![0, 2, 4]));
//! odd.size();
//! ```
//!
//! ```compile_fail
//! use setalgebra::ops::*;
//! use setalgebra::{ArraySet, NotSet};
//!
//! let odd = NotSet::of(ArraySet::from(vec![0, 2, 4]));
//! odd.to_vec();
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use setalgebra::ops::*;
//! use setalgebra::{NotSet, StringSet};
//!
//! let vowels: Rc<StringSet> =
//!   Rc::new(vec!["a", "e", "i", "o", "u"].into_iter().collect());
//! let consonants = vowels.complement();
//! assert!(consonants.contains("z"));
//! assert!(!consonants.contains("a"));
//!
//! // The double complement hands the shared original back.
//! assert!(consonants.complement().contains("a"));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::ops::*;

pub struct NotSet<S> {
  inner: Rc<S>
}

impl<S> NotSet<S> {
  /// Wraps an already shared set. The set is referenced, never copied, so
  /// later mutations through other handles are observed by the complement.
  pub fn new(inner: Rc<S>) -> NotSet<S> {
    NotSet { inner }
  }

  /// Convenience constructor taking ownership of the underlying set.
  pub fn of(set: S) -> NotSet<S> {
    NotSet::new(Rc::new(set))
  }

  pub fn underlying(&self) -> &S {
    &self.inner
  }
}

impl<S> Clone for NotSet<S> {
  fn clone(&self) -> NotSet<S> {
    NotSet { inner: self.inner.clone() }
  }
}

impl<S: fmt::Debug> fmt::Debug for NotSet<S> {
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "NotSet({:?})", self.inner)
  }
}

impl<Item: ?Sized, S> Contains<Item> for NotSet<S> where
  S: Contains<Item>
{
  fn contains(&self, value: &Item) -> bool {
    !self.inner.contains(value)
  }
}

// Two complements are equal exactly when the sets they negate are.
impl<S: PartialEq> PartialEq for NotSet<S> {
  fn eq(&self, other: &NotSet<S>) -> bool {
    *self.inner == *other.inner
  }
}

impl<S: Eq> Eq for NotSet<S> {}

impl<S> Complement for Rc<S> {
  type Output = NotSet<S>;

  fn complement(&self) -> NotSet<S> {
    NotSet::new(self.clone())
  }
}

impl<S> Complement for NotSet<S> {
  type Output = Rc<S>;

  fn complement(&self) -> Rc<S> {
    self.inner.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::array_set::ArraySet;
  use crate::string_set::StringSet;

  #[test]
  fn membership_is_negated() {
    let evens = ArraySet::from(vec![0, 2, 4, 6, 8]);
    let odds = NotSet::of(evens.clone());

    for x in 0..10 {
      assert!(odds.contains(&x) == !evens.contains(&x),
        "complement membership of {} disagrees with the underlying set", x);
    }
  }

  #[test]
  fn wraps_without_copying() {
    let shared = Rc::new(ArraySet::from(vec![1, 2]));
    let not = NotSet::new(shared.clone());
    assert!(Rc::ptr_eq(&shared, &not.complement()));
  }

  #[test]
  fn equality_compares_underlying_sets() {
    let a = NotSet::of(ArraySet::from(vec![1, 2]));
    let b = NotSet::of(ArraySet::from(vec![2, 1]));
    let c = NotSet::of(ArraySet::from(vec![3]));
    assert!(a == b);
    assert!(a != c);
  }

  #[test]
  fn double_complement_restores_membership() {
    let vowels: Rc<StringSet> = Rc::new(vec!["a", "e"].into_iter().collect());
    let consonants = vowels.complement();
    let back = consonants.complement();
    assert!(back.contains("a"));
    assert!(!consonants.contains("a"));
    assert!(consonants.contains("z"));
  }

  #[test]
  fn complement_of_a_complement_store() {
    // NotSet nests: the complement of a complement negates twice.
    let evens = NotSet::of(NotSet::of(ArraySet::from(vec![0, 2])));
    assert!(evens.contains(&0));
    assert!(!evens.contains(&1));
  }
}
