// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Capability traits of the set hierarchy and the algebra derived from them.
//!
//! The design is layered: concrete stores only supply the primitives
//! ([`Contains`], [`Cardinality`], [`Enumerable`], [`Insert`], [`Remove`])
//! and every derived operation (`union`, `intersection`, `difference`,
//! `set_eq`, subset predicates, ...) is implemented once, generically, over
//! those primitives. A store that supplies membership and traversal gets the
//! whole algebra for free; a store that supplies membership alone (such as a
//! complement) gets exactly the membership operations and nothing else.
//!
//! # Examples
//!
//! Generic algorithms are written by specifying trait bounds on type
//! parameters:
//!
//! ```rust
//! use setalgebra::ops::*;
//! use setalgebra::ArraySet;
//!
//! fn symmetric_difference<A>(a: &A, b: &A) -> A where
//!  A: Union<Output=A> + Intersection<Output=A> + Difference<Output=A>
//! {
//!   let union = a.union(b);
//!   let intersect = a.intersection(b);
//!   union.difference(&intersect)
//! }
//!
//! let a = ArraySet::from(vec![1, 2, 3, 4]);
//! let b = ArraySet::from(vec![3, 4, 5, 6]);
//! assert_eq!(symmetric_difference(&a, &b), ArraySet::from(vec![1, 2, 5, 6]));
//! ```
//!
//! The capability layers carry no state of their own and cannot be
//! instantiated; only concrete stores can:
//!
//! ```compile_fail
//! use setalgebra::ops::*;
//!
//! let set: Cardinality = panic!();
//! ```

use std::fmt;
use std::fmt::Display;
use num_traits::{One, Unsigned, Zero};

// Kind

pub trait Collection {
  type Item;
}

// Membership

pub trait Contains<Item: ?Sized> {
  fn contains(&self, value: &Item) -> bool;
}

// Cardinality

pub trait Cardinality {
  type Size: Unsigned;
  fn size(&self) -> Self::Size;

  fn is_singleton(&self) -> bool {
    self.size() == <Self::Size as One>::one()
  }

  fn is_empty(&self) -> bool {
    self.size() == <Self::Size as Zero>::zero()
  }
}

// Traversal

pub trait Enumerable: Collection + Cardinality {
  /// Traversal primitive. Visits each distinct element exactly once, in the
  /// store's own order, stopping early as soon as `visit` returns `false`.
  /// Returns `true` iff the traversal ran to completion.
  fn for_each_while<F>(&self, visit: F) -> bool where
    F: FnMut(&Self::Item) -> bool;

  /// Visits every element. A panic raised by the visitor propagates to the
  /// caller unchanged.
  fn for_each<F>(&self, mut visit: F) where
    F: FnMut(&Self::Item)
  {
    self.for_each_while(|x| { visit(x); true });
  }

  /// Collects the elements observed during one traversal.
  fn to_vec(&self) -> Vec<Self::Item> where
    Self::Item: Clone
  {
    let mut elements = vec![];
    self.for_each(|x| elements.push(x.clone()));
    elements
  }

  /// Renders the set as `{e1, e2, e3}`, the empty set as `{}`. Concrete
  /// stores forward their `Display` impl here.
  fn fmt_set(&self, formatter: &mut fmt::Formatter) -> fmt::Result where
    Self::Item: Display
  {
    formatter.write_str("{")?;
    let mut sep = "";
    let mut res = Ok(());
    self.for_each_while(|x| {
      res = write!(formatter, "{}{}", sep, x);
      sep = ", ";
      res.is_ok()
    });
    res?;
    formatter.write_str("}")
  }
}

// Mutation
//
// Both primitives are idempotent: inserting a present element and removing
// an absent one are no-ops. The returned flag tells whether the set changed.

pub trait Insert<Item> {
  fn insert(&mut self, value: Item) -> bool;
}

pub trait Remove<Item: ?Sized> {
  fn remove(&mut self, value: &Item) -> bool;
}

// Construction

pub trait Empty {
  fn empty() -> Self;
}

pub trait Singleton<Item> {
  fn singleton(value: Item) -> Self;
}

// Structural equality
//
// Two sets are equal when they have the same size and every element of one
// is a member of the other. The check short-circuits on the first miss and
// never allocates. The `PartialEq` impls of the concrete stores delegate
// here, so equality is order-insensitive and crosses store kinds.

pub trait SetEquality<RHS = Self> {
  fn set_eq(&self, rhs: &RHS) -> bool;
}

impl<A, B> SetEquality<B> for A where
  A: Enumerable,
  B: Contains<<A as Collection>::Item> + Cardinality<Size = <A as Cardinality>::Size>
{
  fn set_eq(&self, other: &B) -> bool {
    if self.size() != other.size() {
      return false;
    }
    self.for_each_while(|x| other.contains(x))
  }
}

// In-place set operations
//
// Each operation mutates `self` only; `other` is traversed or queried but
// never changed. `intersection_assign` enumerates `self` while removing from
// it, so it runs over a snapshot of the elements taken before the first
// removal.

pub trait UnionAssign<RHS = Self> {
  fn union_assign(&mut self, rhs: &RHS);
}

pub trait IntersectionAssign<RHS = Self> {
  fn intersection_assign(&mut self, rhs: &RHS);
}

pub trait DifferenceAssign<RHS = Self> {
  fn difference_assign(&mut self, rhs: &RHS);
}

pub trait SymmetricDifferenceAssign<RHS = Self> {
  fn symmetric_difference_assign(&mut self, rhs: &RHS);
}

impl<A, B> UnionAssign<B> for A where
  A: Collection + Insert<<A as Collection>::Item>,
  B: Enumerable + Collection<Item = <A as Collection>::Item>,
  <A as Collection>::Item: Clone
{
  fn union_assign(&mut self, other: &B) {
    other.for_each(|x| { self.insert(x.clone()); });
  }
}

impl<A, B> IntersectionAssign<B> for A where
  A: Enumerable + Remove<<A as Collection>::Item>,
  B: Contains<<A as Collection>::Item>,
  <A as Collection>::Item: Clone
{
  fn intersection_assign(&mut self, other: &B) {
    for x in self.to_vec() {
      if !other.contains(&x) {
        self.remove(&x);
      }
    }
  }
}

impl<A, B> DifferenceAssign<B> for A where
  A: Collection + Remove<<A as Collection>::Item>,
  B: Enumerable + Collection<Item = <A as Collection>::Item>
{
  fn difference_assign(&mut self, other: &B) {
    other.for_each(|x| { self.remove(x); });
  }
}

impl<A, B> SymmetricDifferenceAssign<B> for A where
  A: Collection + Insert<<A as Collection>::Item> + Remove<<A as Collection>::Item>,
  B: Enumerable + Collection<Item = <A as Collection>::Item>,
  <A as Collection>::Item: Clone
{
  fn symmetric_difference_assign(&mut self, other: &B) {
    other.for_each(|x| {
      if !self.remove(x) {
        self.insert(x.clone());
      }
    });
  }
}

// Value-level set operations, derived from the in-place forms.

pub trait Union<RHS = Self> {
  type Output;
  fn union(&self, rhs: &RHS) -> Self::Output;
}

pub trait Intersection<RHS = Self> {
  type Output;
  fn intersection(&self, rhs: &RHS) -> Self::Output;
}

pub trait Difference<RHS = Self> {
  type Output;
  fn difference(&self, rhs: &RHS) -> Self::Output;
}

pub trait SymmetricDifference<RHS = Self> {
  type Output;
  fn symmetric_difference(&self, rhs: &RHS) -> Self::Output;
}

impl<A, B> Union<B> for A where
  A: Clone + UnionAssign<B>
{
  type Output = A;

  fn union(&self, other: &B) -> A {
    let mut result = self.clone();
    result.union_assign(other);
    result
  }
}

impl<A, B> Intersection<B> for A where
  A: Clone + IntersectionAssign<B>
{
  type Output = A;

  fn intersection(&self, other: &B) -> A {
    let mut result = self.clone();
    result.intersection_assign(other);
    result
  }
}

impl<A, B> Difference<B> for A where
  A: Clone + DifferenceAssign<B>
{
  type Output = A;

  fn difference(&self, other: &B) -> A {
    let mut result = self.clone();
    result.difference_assign(other);
    result
  }
}

impl<A, B> SymmetricDifference<B> for A where
  A: Clone + SymmetricDifferenceAssign<B>
{
  type Output = A;

  fn symmetric_difference(&self, other: &B) -> A {
    let mut result = self.clone();
    result.symmetric_difference_assign(other);
    result
  }
}

// Inclusion and overlap predicates

pub trait Subset<RHS = Self> {
  fn is_subset(&self, rhs: &RHS) -> bool;
}

pub trait ProperSubset<RHS = Self> {
  fn is_proper_subset(&self, rhs: &RHS) -> bool;
}

pub trait Disjoint<RHS = Self> {
  fn is_disjoint(&self, rhs: &RHS) -> bool;
}

pub trait Overlap<RHS = Self> {
  fn overlap(&self, rhs: &RHS) -> bool;
}

impl<A, B> Subset<B> for A where
  A: Enumerable,
  B: Contains<<A as Collection>::Item>
{
  fn is_subset(&self, other: &B) -> bool {
    self.for_each_while(|x| other.contains(x))
  }
}

impl<A, B> ProperSubset<B> for A where
  A: Enumerable,
  B: Contains<<A as Collection>::Item> + Cardinality<Size = <A as Cardinality>::Size>,
  <A as Cardinality>::Size: PartialOrd
{
  fn is_proper_subset(&self, other: &B) -> bool {
    self.size() < other.size() && self.is_subset(other)
  }
}

impl<A, B> Disjoint<B> for A where
  A: Enumerable,
  B: Contains<<A as Collection>::Item>
{
  fn is_disjoint(&self, other: &B) -> bool {
    self.for_each_while(|x| !other.contains(x))
  }
}

impl<A, B> Overlap<B> for A where
  A: Disjoint<B>
{
  fn overlap(&self, other: &B) -> bool {
    !self.is_disjoint(other)
  }
}

// Complement

pub trait Complement {
  type Output;
  fn complement(&self) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::array_set::ArraySet;
  use crate::bit_set::BitSet;
  use crate::string_set::StringSet;

  fn evens() -> ArraySet<u32> {
    ArraySet::from(vec![0, 2, 4, 6, 8])
  }

  fn small() -> ArraySet<u32> {
    ArraySet::from(vec![0, 1, 2, 3, 4])
  }

  #[test]
  fn union_test() {
    let sym_cases = vec![
      (ArraySet::from(vec![]), ArraySet::from(vec![]), ArraySet::from(vec![])),
      (ArraySet::from(vec![]), small(), small()),
      (small(), small(), small()),
      (evens(), small(), ArraySet::from(vec![0, 1, 2, 3, 4, 6, 8])),
    ];

    for (x, y, r) in sym_cases.into_iter() {
      assert!(x.union(&y) == r, "{} union {} is not equal to {}", x, y, r);
      assert!(y.union(&x) == r, "{} union {} is not equal to {}", y, x, r);
    }
  }

  #[test]
  fn union_is_idempotent() {
    let once = evens().union(&small());
    let twice = once.union(&small());
    assert_eq!(once, twice);
  }

  #[test]
  fn union_never_mutates_rhs() {
    let mut x = evens();
    let y = small();
    let y_before = y.to_vec();
    x.union_assign(&y);
    assert_eq!(y.to_vec(), y_before);
  }

  #[test]
  fn intersection_test() {
    let sym_cases = vec![
      (ArraySet::from(vec![]), small(), ArraySet::from(vec![])),
      (small(), small(), small()),
      (evens(), small(), ArraySet::from(vec![0, 2, 4])),
      (evens(), ArraySet::from(vec![1, 3, 5]), ArraySet::from(vec![])),
    ];

    for (x, y, r) in sym_cases.into_iter() {
      assert!(x.intersection(&y) == r, "{} intersection {} is not equal to {}", x, y, r);
      assert!(y.intersection(&x) == r, "{} intersection {} is not equal to {}", y, x, r);
    }
  }

  #[test]
  fn intersection_snapshots_before_removing() {
    // The traversal runs over a snapshot, so removals triggered by the
    // operation itself cannot disturb it.
    let mut x = ArraySet::from(vec![1, 2, 3, 4, 5, 6]);
    x.intersection_assign(&ArraySet::from(vec![2, 4, 6]));
    assert_eq!(x.to_vec(), vec![2, 4, 6]);
  }

  #[test]
  fn difference_test() {
    let cases = vec![
      (small(), ArraySet::from(vec![]), small()),
      (small(), small(), ArraySet::from(vec![])),
      (evens(), small(), ArraySet::from(vec![6, 8])),
      (small(), evens(), ArraySet::from(vec![1, 3])),
    ];

    for (x, y, r) in cases.into_iter() {
      assert!(x.difference(&y) == r, "{} difference {} is not equal to {}", x, y, r);
    }
  }

  #[test]
  fn difference_removes_every_rhs_element() {
    let result = small().difference(&evens());
    evens().for_each(|x| {
      assert!(!result.contains(x), "{} still contains {}", result, x);
    });
  }

  #[test]
  fn symmetric_difference_test() {
    let sym_cases = vec![
      (small(), ArraySet::from(vec![]), small()),
      (small(), small(), ArraySet::from(vec![])),
      (evens(), small(), ArraySet::from(vec![6, 8, 1, 3])),
    ];

    for (x, y, r) in sym_cases.into_iter() {
      assert!(x.symmetric_difference(&y) == r,
        "{} symmetric_difference {} is not equal to {}", x, y, r);
      assert!(y.symmetric_difference(&x) == r,
        "{} symmetric_difference {} is not equal to {}", y, x, r);
    }
  }

  #[test]
  fn subset_test() {
    let cases = vec![
      (ArraySet::from(vec![]), small(), true, true),
      (small(), small(), true, false),
      (ArraySet::from(vec![0, 2]), evens(), true, true),
      (evens(), small(), false, false),
    ];

    for (x, y, sub, proper) in cases.into_iter() {
      assert!(x.is_subset(&y) == sub, "{} subset {} is not equal to {}", x, y, sub);
      assert!(x.is_proper_subset(&y) == proper,
        "{} proper_subset {} is not equal to {}", x, y, proper);
    }
  }

  #[test]
  fn disjoint_and_overlap_test() {
    let sym_cases = vec![
      (ArraySet::from(vec![]), small(), true),
      (evens(), ArraySet::from(vec![1, 3, 5]), true),
      (evens(), small(), false),
    ];

    for (x, y, r) in sym_cases.into_iter() {
      assert!(x.is_disjoint(&y) == r, "{} disjoint {} is not equal to {}", x, y, r);
      assert!(y.is_disjoint(&x) == r, "{} disjoint {} is not equal to {}", y, x, r);
      assert!(x.overlap(&y) == !r, "{} overlap {} is not equal to {}", x, y, !r);
      assert!(y.overlap(&x) == !r, "{} overlap {} is not equal to {}", y, x, !r);
    }
  }

  #[test]
  fn algebra_crosses_store_kinds() {
    let mut names: ArraySet<String> = vec!["ada", "brian"].into_iter()
      .map(String::from).collect();
    let more: StringSet = vec!["brian", "grace"].into_iter().collect();

    names.union_assign(&more);
    assert_eq!(names.size(), 3);
    assert!(names.contains(&String::from("grace")));

    let mut bits: BitSet = vec![1usize, 2, 3].into_iter().collect();
    bits.difference_assign(&ArraySet::from(vec![2usize, 9]));
    assert_eq!(bits.to_vec(), vec![1, 3]);
  }

  #[test]
  fn size_matches_traversal() {
    let sets = vec![ArraySet::from(vec![]), small(), evens()];
    for set in sets.into_iter() {
      assert_eq!(set.size(), set.to_vec().len());
    }
  }

  #[test]
  #[should_panic(expected = "visitor failure")]
  fn visitor_panic_propagates() {
    small().for_each(|_| panic!("visitor failure"));
  }

  #[test]
  fn set_eq_short_circuits_on_size() {
    // A size mismatch must answer before any membership query runs.
    struct NoQueries;
    impl Collection for NoQueries { type Item = u32; }
    impl Cardinality for NoQueries {
      type Size = usize;
      fn size(&self) -> usize { 17 }
    }
    impl Contains<u32> for NoQueries {
      fn contains(&self, _: &u32) -> bool {
        panic!("membership must not be queried when sizes differ");
      }
    }

    assert!(!small().set_eq(&NoQueries));
  }
}
