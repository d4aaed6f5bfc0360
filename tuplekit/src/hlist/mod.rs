//! Heterogeneous, statically shaped lists.
//!
//! A list is a chain of [`HCons`] cells ending in [`HNil`], so its length and
//! every position's element type are part of its type. The operations in
//! [`ops`] are traits whose associated `Output` type is the shape of the
//! result, resolved by the compiler from the head/tail structure alone.
//! [`tuple`] converts to and from native Rust tuples.
//!
//! ```
//! use tuplekit::hlist::ops::{Append, Reverse};
//! use tuplekit::{HList, hlist};
//!
//! let list: HList![u8, &str] = hlist![1, "two"];
//! let reversed: HList![char, &str, u8] = list.append('3').reverse();
//! assert_eq!(reversed, hlist!['3', "two", 1]);
//! ```

pub mod nat;
pub mod ops;
pub mod tuple;

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HNil;

/// A list with element `head` in position 0 followed by `tail`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Marker for well-formed lists.
pub trait HList: Sized {
    /// Number of elements.
    const LEN: usize;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Build a list value: `hlist![1, "a", 'c']`.
#[macro_export]
macro_rules! hlist {
    () => {
        $crate::hlist::HNil
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist!($($tail),*),
        }
    };
}

/// Name a list type: `HList![i32, &str, char]`.
#[macro_export]
macro_rules! HList {
    () => {
        $crate::hlist::HNil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::hlist::HCons<$head, $crate::HList!($($tail),*)>
    };
}

/// Destructure a list value: `let hlist_pat![a, b] = list;`.
#[macro_export]
macro_rules! hlist_pat {
    () => {
        $crate::hlist::HNil
    };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist_pat!($($tail),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_cells() {
        assert_eq!(HNil.len(), 0);
        assert!(HNil.is_empty());
        assert_eq!(hlist![1, "a", 'c'].len(), 3);
        assert_eq!(<crate::HList![u8, u16]>::LEN, 2);
    }

    #[test]
    fn pattern_macro_destructures() {
        let crate::hlist_pat![a, b, c] = hlist![1, "a", 'c'];
        assert_eq!((a, b, c), (1, "a", 'c'));
    }
}
