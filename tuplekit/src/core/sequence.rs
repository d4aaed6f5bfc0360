//! Persistent immutable sequence backed by a shared cons list.
//!
//! The list is the decompose/recompose primitive everything else is built
//! on: [`Sequence::uncons`] splits off the head, [`Sequence::cons`] rebuilds
//! from an element plus a remainder in O(1). Tails are shared through `Arc`,
//! so "new" sequences reuse the structure of their inputs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TupleError};

/// Build a [`Sequence`] from a list of elements.
///
/// ```
/// let s = tuplekit::seq![1, 2, 3];
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($element),+])
    };
}

struct Node<T> {
    value: T,
    next: Option<Arc<Node<T>>>,
}

/// An ordered, finite, immutable sequence.
pub struct Sequence<T> {
    head: Option<Arc<Node<T>>>,
    len: usize,
}

impl<T> Sequence<T> {
    /// The empty sequence.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn singleton(value: T) -> Self {
        Self::new().push_front(value)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element at position 0, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Everything after the head. Empty for an empty sequence.
    pub fn tail(&self) -> Self {
        self.uncons().map(|(_, rest)| rest).unwrap_or_default()
    }

    /// Split into `(head, remainder)`, sharing the remainder's structure.
    pub fn uncons(&self) -> Option<(&T, Self)> {
        let node = self.head.as_deref()?;
        let rest = Self {
            head: node.next.clone(),
            len: self.len - 1,
        };
        Some((&node.value, rest))
    }

    /// New sequence with `value` at position 0 followed by `self`. O(1).
    pub fn cons(&self, value: T) -> Self {
        Self {
            head: Some(Arc::new(Node {
                value,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Owned variant of [`Sequence::cons`] used by accumulators.
    pub(crate) fn push_front(mut self, value: T) -> Self {
        let next = self.head.take();
        Self {
            head: Some(Arc::new(Node { value, next })),
            len: self.len + 1,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(TupleError::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Split into `(init, last)`. The init is rebuilt, so this is O(n).
    pub fn split_last(&self) -> Option<(Self, &T)> {
        let mut items: Vec<&T> = self.iter().collect();
        let last = items.pop()?;
        let init = items
            .into_iter()
            .rev()
            .fold(Self::new(), |acc, item| acc.push_front(item.clone()));
        Some((init, last))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// Unlink nodes one at a time so long lists cannot overflow the stack on drop.
impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::into_inner(node) {
                Some(mut node) => next = node.next.take(),
                None => break,
            }
        }
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Self::new(), |acc, item| acc.push_front(item))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Borrowing iterator, front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator. Moves values out of nodes it holds uniquely and clones
/// from nodes still shared with another sequence.
pub struct IntoIter<T> {
    next: Option<Arc<Node<T>>>,
    remaining: usize,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.remaining -= 1;
        match Arc::try_unwrap(node) {
            Ok(Node { value, next }) => {
                self.next = next;
                Some(value)
            }
            Err(shared) => {
                self.next = shared.next.clone();
                Some(shared.value.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match Arc::into_inner(node) {
                Some(mut node) => next = node.next.take(),
                None => break,
            }
        }
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            next: self.head.take(),
            remaining: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uncons_splits_head_and_shares_rest() {
        let s = seq![1, 2, 3];
        let (head, rest) = s.uncons().expect("non-empty");
        assert_eq!(*head, 1);
        assert_eq!(rest, seq![2, 3]);
        assert!(Sequence::<i32>::new().uncons().is_none());
    }

    #[test]
    fn cons_leaves_original_untouched() {
        let base = seq!["b", "c"];
        let grown = base.cons("a");
        assert_eq!(grown, seq!["a", "b", "c"]);
        assert_eq!(base, seq!["b", "c"]);
    }

    #[test]
    fn split_last_returns_init_and_last() {
        let s = seq![1, 2, 3];
        let (init, last) = s.split_last().expect("non-empty");
        assert_eq!(init, seq![1, 2]);
        assert_eq!(*last, 3);
        assert!(Sequence::<u8>::new().split_last().is_none());
    }

    #[test]
    fn tail_of_empty_is_empty() {
        assert!(Sequence::<u8>::new().tail().is_empty());
        assert_eq!(seq![1, 2].tail(), seq![2]);
    }

    #[test]
    fn try_get_reports_out_of_bounds() {
        let s = seq!['x', 'y'];
        assert_eq!(s.try_get(1), Ok(&'y'));
        assert_eq!(
            s.try_get(2),
            Err(TupleError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn display_renders_bracketed_list() {
        assert_eq!(seq![1, 2, 3].to_string(), "[1, 2, 3]");
        assert_eq!(Sequence::<i32>::new().to_string(), "[]");
    }

    #[test]
    fn serde_uses_plain_arrays() {
        let s: Sequence<serde_json::Value> = serde_json::from_value(json!([0, "a", null]))
            .expect("deserialize");
        assert_eq!(s.len(), 3);
        assert_eq!(serde_json::to_value(&s).expect("serialize"), json!([0, "a", null]));
    }

    #[test]
    fn into_iter_clones_shared_nodes() {
        let base = seq![String::from("a"), String::from("b")];
        let kept = base.clone();
        let moved: Vec<String> = base.into_iter().collect();
        assert_eq!(moved, vec!["a", "b"]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn dropping_long_sequence_does_not_overflow() {
        let long: Sequence<u32> = (0..500_000).collect();
        assert_eq!(long.len(), 500_000);
        drop(long);
    }
}
