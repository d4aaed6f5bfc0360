//! Conversions between native tuples and lists, and the operations lifted to
//! native tuples.
//!
//! Tuples of up to 12 elements convert in both directions. Results whose
//! shape has more than 12 elements stay usable as lists but cannot be turned
//! back into a tuple.
//!
//! ```
//! use tuplekit::hlist::tuple::{append, concat, reverse};
//!
//! assert_eq!(reverse((0, "one", 2.0)), (2.0, "one", 0));
//! assert_eq!(append((0, 1), 'x'), (0, 1, 'x'));
//! assert_eq!(concat((0, 1, 2), ('a', 'b', 'c')), (0, 1, 2, 'a', 'b', 'c'));
//! ```

use crate::hlist::{HCons, HNil};
use crate::hlist::ops::{
    Append, Appended, Concat, ConcatMultiple, Concatenated, First, FirstOf, Flattened, Last,
    LastOf, LastOr, LastOrOf, Prepend, Prepended, Repeat, Repeated, Reverse, Reversed,
};

/// Native tuple to list.
pub trait IntoHList {
    type List;

    fn into_hlist(self) -> Self::List;
}

/// List to native tuple.
pub trait IntoTuple {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

macro_rules! tuple_conversions {
    ($($name:ident)*) => {
        impl<$($name),*> IntoHList for ($($name,)*) {
            type List = crate::HList![$($name),*];

            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_hlist(self) -> Self::List {
                let ($($name,)*) = self;
                crate::hlist![$($name),*]
            }
        }

        impl<$($name),*> IntoTuple for crate::HList![$($name),*] {
            type Tuple = ($($name,)*);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_tuple(self) -> Self::Tuple {
                let crate::hlist_pat![$($name),*] = self;
                ($($name,)*)
            }
        }
    };
}

tuple_conversions!();
tuple_conversions!(A);
tuple_conversions!(A B);
tuple_conversions!(A B C);
tuple_conversions!(A B C D);
tuple_conversions!(A B C D E);
tuple_conversions!(A B C D E F);
tuple_conversions!(A B C D E F G);
tuple_conversions!(A B C D E F G H);
tuple_conversions!(A B C D E F G H I);
tuple_conversions!(A B C D E F G H I J);
tuple_conversions!(A B C D E F G H I J K);
tuple_conversions!(A B C D E F G H I J K L);

/// Convert every member of a list of tuples into a list.
pub trait MembersIntoHLists {
    type Lists;

    fn members_into_hlists(self) -> Self::Lists;
}

impl MembersIntoHLists for HNil {
    type Lists = HNil;

    fn members_into_hlists(self) -> HNil {
        HNil
    }
}

impl<Tup: IntoHList, Rest: MembersIntoHLists> MembersIntoHLists for HCons<Tup, Rest> {
    type Lists = HCons<Tup::List, Rest::Lists>;

    fn members_into_hlists(self) -> Self::Lists {
        HCons {
            head: self.head.into_hlist(),
            tail: self.tail.members_into_hlists(),
        }
    }
}

pub type ListOf<Tup> = <Tup as IntoHList>::List;
pub type TupleOf<L> = <L as IntoTuple>::Tuple;

pub fn first<Tup>(tuple: Tup) -> FirstOf<ListOf<Tup>>
where
    Tup: IntoHList,
    ListOf<Tup>: First,
{
    tuple.into_hlist().first()
}

pub fn last<Tup>(tuple: Tup) -> LastOf<ListOf<Tup>>
where
    Tup: IntoHList,
    ListOf<Tup>: Last,
{
    tuple.into_hlist().last()
}

pub fn last_or<Tup, D>(tuple: Tup, default: D) -> LastOrOf<ListOf<Tup>, D>
where
    Tup: IntoHList,
    ListOf<Tup>: LastOr<D>,
{
    tuple.into_hlist().last_or(default)
}

pub fn prepend<Tup, E>(tuple: Tup, element: E) -> TupleOf<Prepended<ListOf<Tup>, E>>
where
    Tup: IntoHList,
    ListOf<Tup>: Prepend<E>,
    Prepended<ListOf<Tup>, E>: IntoTuple,
{
    tuple.into_hlist().prepend(element).into_tuple()
}

pub fn append<Tup, E>(tuple: Tup, element: E) -> TupleOf<Appended<ListOf<Tup>, E>>
where
    Tup: IntoHList,
    ListOf<Tup>: Append<E>,
    Appended<ListOf<Tup>, E>: IntoTuple,
{
    tuple.into_hlist().append(element).into_tuple()
}

pub fn reverse<Tup>(tuple: Tup) -> TupleOf<Reversed<ListOf<Tup>>>
where
    Tup: IntoHList,
    ListOf<Tup>: Reverse,
    Reversed<ListOf<Tup>>: IntoTuple,
{
    tuple.into_hlist().reverse().into_tuple()
}

pub fn concat<Left, Right>(
    left: Left,
    right: Right,
) -> TupleOf<Concatenated<ListOf<Left>, ListOf<Right>>>
where
    Left: IntoHList,
    Right: IntoHList,
    ListOf<Left>: Concat<ListOf<Right>>,
    Concatenated<ListOf<Left>, ListOf<Right>>: IntoTuple,
{
    left.into_hlist().concat(right.into_hlist()).into_tuple()
}

/// `N` copies of `value` as a native tuple.
pub fn repeat<N, T>(value: T) -> TupleOf<Repeated<T, N>>
where
    N: Repeat<T>,
    Repeated<T, N>: IntoTuple,
{
    N::repeat(value).into_tuple()
}

/// Flatten a tuple of tuples: `((), (0,), (1, 2))` becomes `(0, 1, 2)`.
pub fn concat_multiple<Set>(
    set: Set,
) -> TupleOf<Flattened<<ListOf<Set> as MembersIntoHLists>::Lists>>
where
    Set: IntoHList,
    ListOf<Set>: MembersIntoHLists,
    <ListOf<Set> as MembersIntoHLists>::Lists: ConcatMultiple,
    Flattened<<ListOf<Set> as MembersIntoHLists>::Lists>: IntoTuple,
{
    set.into_hlist()
        .members_into_hlists()
        .concat_multiple()
        .into_tuple()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlist::nat::{N0, N4};
    use crate::hlist;

    #[test]
    fn tuples_round_trip_through_lists() {
        assert_eq!((1, "a", 'c').into_hlist(), hlist![1, "a", 'c']);
        assert_eq!(hlist![1, "a", 'c'].into_tuple(), (1, "a", 'c'));
        assert_eq!(().into_hlist(), HNil);
        let () = HNil.into_tuple();
    }

    #[test]
    fn first_and_last_of_tuples() {
        assert_eq!(first((0, 1, 2)), 0);
        assert_eq!(last((0, 1, 2)), 2);
        assert_eq!(last(("only",)), "only");
        assert_eq!(last_or((), 'd'), 'd');
        assert_eq!(last_or((1, 2), 'd'), 2);
    }

    #[test]
    fn prepend_and_append_on_tuples() {
        assert_eq!(prepend((0, 1, 2), "new"), ("new", 0, 1, 2));
        assert_eq!(append((0, 1, 2), "new"), (0, 1, 2, "new"));
        assert_eq!(append((), 1), (1,));
    }

    #[test]
    fn reverse_on_tuples() {
        assert_eq!(reverse((0, 1, 2)), (2, 1, 0));
        let () = reverse(());
        assert_eq!(reverse(reverse(('a', 2, "c"))), ('a', 2, "c"));
    }

    #[test]
    fn concat_on_tuples() {
        assert_eq!(concat((), (1, 2)), (1, 2));
        assert_eq!(concat((1, 2), ()), (1, 2));
    }

    #[test]
    fn repeat_on_tuples() {
        assert_eq!(repeat::<N4, _>("foo"), ("foo", "foo", "foo", "foo"));
        let () = repeat::<N0, _>("foo");
    }

    #[test]
    fn concat_multiple_on_tuples() {
        assert_eq!(concat_multiple(((), (0,), (1, 2), (3, 4, 5))), (0, 1, 2, 3, 4, 5));
        let () = concat_multiple(());
        assert_eq!(concat_multiple(((7, 8),)), (7, 8));
    }
}
