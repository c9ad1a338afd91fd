// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library proposes a small set algebra layered as capabilities: a set
//! of traits for membership, cardinality, traversal and mutation, and the
//! whole derived algebra (union, intersection, difference, structural
//! equality, subset predicates) implemented once over those traits. Several
//! backing stores are provided ([`ArraySet`], [`StringSet`], [`BitSet`],
//! [`SingletonSet`]) together with a membership-only complement
//! ([`NotSet`]); any type that supplies the primitives joins the algebra.
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::ops::*;
//! use setalgebra::{ArraySet, NotSet};
//!
//! let mut reachable = ArraySet::from(vec!["start", "a", "b"]);
//! reachable.union_assign(&ArraySet::from(vec!["b", "c"]));
//! assert_eq!(reachable.to_string(), "{start, a, b, c}");
//!
//! let unreachable = NotSet::of(reachable);
//! assert!(unreachable.contains(&"zzz"));
//! ```
//!
//! For the operation traits and their laws, see the [ops module](ops/index.html).

#[macro_use]
mod macros;
pub mod ops;
pub mod array_set;
pub mod string_set;
pub mod singleton_set;
pub mod bit_set;
pub mod not_set;

pub use crate::array_set::ArraySet;
pub use crate::bit_set::BitSet;
pub use crate::not_set::NotSet;
pub use crate::singleton_set::SingletonSet;
pub use crate::string_set::StringSet;
