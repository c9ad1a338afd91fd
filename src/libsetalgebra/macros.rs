// Copyright 2026 The set-algebra Developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Forwards `PartialEq` to the structural `set_eq` check, so `==` between two
// stores is order-insensitive and works across store kinds. `SetEquality`
// must be in scope at the expansion site.
macro_rules! set_eq_impl {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> PartialEq<$rhs:ty> for $lhs:ty) => {
    impl<$($bn: $($bs+)*),*> PartialEq<$rhs> for $lhs {
      fn eq(&self, other: &$rhs) -> bool {
        self.set_eq(other)
      }
    }
  };
  (impl PartialEq<$rhs:ty> for $lhs:ty) => {
    impl PartialEq<$rhs> for $lhs {
      fn eq(&self, other: &$rhs) -> bool {
        self.set_eq(other)
      }
    }
  };
}
