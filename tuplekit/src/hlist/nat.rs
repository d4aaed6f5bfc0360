//! Type-level natural numbers used as repeat counts.
//!
//! A count is built from zero ([`Z`]) by successors ([`S`]), so it is a
//! non-negative integer by construction.

use std::marker::PhantomData;

/// Zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Z;

/// Successor of `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct S<N>(PhantomData<N>);

pub trait Nat {
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

pub type N0 = Z;
pub type N1 = S<N0>;
pub type N2 = S<N1>;
pub type N3 = S<N2>;
pub type N4 = S<N3>;
pub type N5 = S<N4>;
pub type N6 = S<N5>;
pub type N7 = S<N6>;
pub type N8 = S<N7>;
