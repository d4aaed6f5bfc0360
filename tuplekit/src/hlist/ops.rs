//! The eight operations as traits over [`HNil`]/[`HCons`] lists.
//!
//! Each trait is implemented by structural cases on the list type (empty,
//! single, longer), and each `Output` is the result's shape. The aliases at
//! the bottom name those shapes directly.
//!
//! Operations that need an element are not implemented for [`HNil`], so
//! calling them on an empty list does not compile:
//!
//! ```compile_fail
//! use tuplekit::hlist::HNil;
//! use tuplekit::hlist::ops::First;
//!
//! let _ = HNil.first();
//! ```

use crate::hlist::nat::{Nat, S, Z};
use crate::hlist::{HCons, HList, HNil};

/// Element at position 0.
pub trait First {
    type Output;

    fn first(self) -> Self::Output;
}

impl<H, T: HList> First for HCons<H, T> {
    type Output = H;

    fn first(self) -> H {
        self.head
    }
}

/// Element at position `LEN - 1`, found by stripping heads until one remains.
pub trait Last {
    type Output;

    fn last(self) -> Self::Output;
}

impl<H> Last for HCons<H, HNil> {
    type Output = H;

    fn last(self) -> H {
        self.head
    }
}

impl<H, H2, T> Last for HCons<H, HCons<H2, T>>
where
    HCons<H2, T>: Last,
{
    type Output = <HCons<H2, T> as Last>::Output;

    fn last(self) -> Self::Output {
        self.tail.last()
    }
}

/// Like [`Last`], with a fallback of type `D` for the empty list.
pub trait LastOr<D> {
    type Output;

    fn last_or(self, default: D) -> Self::Output;
}

impl<D> LastOr<D> for HNil {
    type Output = D;

    fn last_or(self, default: D) -> D {
        default
    }
}

impl<D, H> LastOr<D> for HCons<H, HNil> {
    type Output = H;

    fn last_or(self, _default: D) -> H {
        self.head
    }
}

impl<D, H, H2, T> LastOr<D> for HCons<H, HCons<H2, T>>
where
    HCons<H2, T>: LastOr<D>,
{
    type Output = <HCons<H2, T> as LastOr<D>>::Output;

    fn last_or(self, default: D) -> Self::Output {
        self.tail.last_or(default)
    }
}

/// `element` in position 0, followed by `self`.
pub trait Prepend<E> {
    type Output: HList;

    fn prepend(self, element: E) -> Self::Output;
}

impl<L: HList, E> Prepend<E> for L {
    type Output = HCons<E, L>;

    fn prepend(self, element: E) -> Self::Output {
        HCons {
            head: element,
            tail: self,
        }
    }
}

/// Move every element of `self` onto the front of `acc`, head first.
pub trait ReverseOnto<Acc> {
    type Output;

    fn reverse_onto(self, acc: Acc) -> Self::Output;
}

impl<Acc> ReverseOnto<Acc> for HNil {
    type Output = Acc;

    fn reverse_onto(self, acc: Acc) -> Acc {
        acc
    }
}

impl<Acc, H, T> ReverseOnto<Acc> for HCons<H, T>
where
    T: ReverseOnto<HCons<H, Acc>>,
{
    type Output = T::Output;

    fn reverse_onto(self, acc: Acc) -> Self::Output {
        self.tail.reverse_onto(HCons {
            head: self.head,
            tail: acc,
        })
    }
}

/// Elements in reverse order.
pub trait Reverse {
    type Output;

    fn reverse(self) -> Self::Output;
}

impl<L: ReverseOnto<HNil>> Reverse for L {
    type Output = <L as ReverseOnto<HNil>>::Output;

    fn reverse(self) -> Self::Output {
        self.reverse_onto(HNil)
    }
}

/// `self` followed by `element`, as `reverse(prepend(reverse(self), element))`.
pub trait Append<E> {
    type Output;

    fn append(self, element: E) -> Self::Output;
}

impl<L, E> Append<E> for L
where
    L: Reverse,
    HCons<E, <L as Reverse>::Output>: Reverse,
{
    type Output = <HCons<E, <L as Reverse>::Output> as Reverse>::Output;

    fn append(self, element: E) -> Self::Output {
        HCons {
            head: element,
            tail: self.reverse(),
        }
        .reverse()
    }
}

/// Elements of `self` followed by elements of `R`.
pub trait Concat<R> {
    type Output;

    fn concat(self, right: R) -> Self::Output;
}

impl<R> Concat<R> for HNil {
    type Output = R;

    fn concat(self, right: R) -> R {
        right
    }
}

impl<R, H, T: Concat<R>> Concat<R> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    fn concat(self, right: R) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.concat(right),
        }
    }
}

/// A list of lists flattened in order.
pub trait ConcatMultiple {
    type Output;

    fn concat_multiple(self) -> Self::Output;
}

impl ConcatMultiple for HNil {
    type Output = HNil;

    fn concat_multiple(self) -> HNil {
        HNil
    }
}

impl<L, Rest> ConcatMultiple for HCons<L, Rest>
where
    Rest: ConcatMultiple,
    L: Concat<<Rest as ConcatMultiple>::Output>,
{
    type Output = <L as Concat<<Rest as ConcatMultiple>::Output>>::Output;

    fn concat_multiple(self) -> Self::Output {
        self.head.concat(self.tail.concat_multiple())
    }
}

/// `Self` copies of a value, where `Self` is a type-level count.
pub trait Repeat<T>: Nat {
    type Output: HList;

    fn repeat(value: T) -> Self::Output;
}

impl<T> Repeat<T> for Z {
    type Output = HNil;

    fn repeat(_value: T) -> HNil {
        HNil
    }
}

impl<T: Clone, N: Repeat<T>> Repeat<T> for S<N> {
    type Output = HCons<T, N::Output>;

    fn repeat(value: T) -> Self::Output {
        HCons {
            head: value.clone(),
            tail: N::repeat(value),
        }
    }
}

/// `N` copies of `value`: `repeat::<N4, _>("foo")`.
pub fn repeat<N: Repeat<T>, T>(value: T) -> N::Output {
    N::repeat(value)
}

pub type FirstOf<L> = <L as First>::Output;
pub type LastOf<L> = <L as Last>::Output;
pub type LastOrOf<L, D> = <L as LastOr<D>>::Output;
pub type Prepended<L, E> = <L as Prepend<E>>::Output;
pub type Appended<L, E> = <L as Append<E>>::Output;
pub type Reversed<L> = <L as Reverse>::Output;
pub type Concatenated<L, R> = <L as Concat<R>>::Output;
pub type Flattened<L> = <L as ConcatMultiple>::Output;
pub type Repeated<T, N> = <N as Repeat<T>>::Output;
