//! The eight sequence operations over runtime [`Sequence`] values.
//!
//! All recursions run as loops over an explicit accumulator, so no call's
//! stack depth depends on the input length. Multi-element operations peel
//! elements off the *end* of their left input by reversing it first, which on
//! a cons list lets the right-hand input be shared instead of copied.

use tracing::{debug, trace, warn};

use crate::config::Limits;
use crate::core::count::IntoCount;
use crate::core::sequence::Sequence;
use crate::error::{Result, TupleError};

/// Element at position 0.
pub fn first<T>(seq: &Sequence<T>) -> Result<&T> {
    seq.head().ok_or_else(|| {
        warn!("first of an empty sequence");
        TupleError::EmptySequence { operation: "first" }
    })
}

/// Element at position `len - 1`.
pub fn last<T>(seq: &Sequence<T>) -> Result<&T> {
    trace!(len = seq.len(), "last");
    seq.iter().last().ok_or_else(|| {
        warn!("last of an empty sequence");
        TupleError::EmptySequence { operation: "last" }
    })
}

/// Like [`last`], but an empty sequence yields `default`.
pub fn last_or<T: Clone>(seq: &Sequence<T>, default: T) -> T {
    seq.iter().last().cloned().unwrap_or(default)
}

/// `element` followed by `seq`. O(1).
pub fn prepend<T>(seq: &Sequence<T>, element: T) -> Sequence<T> {
    seq.cons(element)
}

/// Elements of `seq` in reverse order.
pub fn reverse<T: Clone>(seq: &Sequence<T>) -> Sequence<T> {
    trace!(len = seq.len(), "reverse");
    seq.iter()
        .fold(Sequence::new(), |acc, item| acc.push_front(item.clone()))
}

/// `seq` followed by `element`, computed as `reverse(prepend(reverse(seq), element))`.
pub fn append<T: Clone>(seq: &Sequence<T>, element: T) -> Sequence<T> {
    trace!(len = seq.len(), "append");
    reverse(&prepend(&reverse(seq), element))
}

/// Elements of `left` followed by elements of `right`.
///
/// `left` is consumed from its last element backwards, each element
/// prepended onto a growing accumulator that starts as `right`.
pub fn concat<T: Clone>(left: &Sequence<T>, right: &Sequence<T>) -> Sequence<T> {
    trace!(left = left.len(), right = right.len(), "concat");
    match left.head() {
        None => right.clone(),
        Some(sole) if left.len() == 1 => prepend(right, sole.clone()),
        Some(_) => reverse(left)
            .into_iter()
            .fold(right.clone(), |acc, item| acc.push_front(item)),
    }
}

/// `count` copies of `value`, using the default [`Limits`].
pub fn repeat<T: Clone, C: IntoCount>(value: T, count: C) -> Result<Sequence<T>> {
    repeat_with(value, count, &Limits::default())
}

/// `count` copies of `value`.
///
/// Fails with [`TupleError::InvalidCount`] for negative, fractional, or
/// non-finite counts and with [`TupleError::CountLimitExceeded`] above
/// `limits.max_repeat`.
pub fn repeat_with<T: Clone, C: IntoCount>(
    value: T,
    count: C,
    limits: &Limits,
) -> Result<Sequence<T>> {
    let count = count.into_count().inspect_err(|err| warn!(%err, "repeat rejected"))?;
    if count > limits.max_repeat {
        warn!(count, limit = limits.max_repeat, "repeat count over limit");
        return Err(TupleError::CountLimitExceeded {
            count,
            limit: limits.max_repeat,
        });
    }

    let mut acc = Sequence::new();
    while acc.len() < count {
        acc = acc.push_front(value.clone());
    }
    debug!(count, "repeat");
    Ok(acc)
}

/// Every member of `set` concatenated in order.
///
/// Members are taken from the last one backwards, so the result is
/// `concat(concat_multiple(init), last)` with each member's tail shared.
pub fn concat_multiple<T: Clone>(set: &Sequence<Sequence<T>>) -> Sequence<T> {
    let merged = reverse(set)
        .iter()
        .fold(Sequence::new(), |acc, member| concat(member, &acc));
    debug!(members = set.len(), len = merged.len(), "concat_multiple");
    merged
}

/// [`concat_multiple`] over any iterator of sequences.
pub fn concat_all<T, I>(sequences: I) -> Sequence<T>
where
    T: Clone,
    I: IntoIterator<Item = Sequence<T>>,
{
    let set: Sequence<Sequence<T>> = sequences.into_iter().collect();
    concat_multiple(&set)
}
