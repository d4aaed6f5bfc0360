//! Structural operations over fixed-shape ordered sequences ("tuples").
//!
//! Every operation is built from one primitive: splitting a sequence into a
//! head and a remainder, and rebuilding a sequence from an element plus a
//! remainder. The crate exposes the same algebra twice:
//!
//! - **[`hlist`]**: heterogeneous, statically shaped lists. Output *types* are
//!   computed by trait resolution, so taking the first element of an empty
//!   list is a compile error rather than a runtime failure.
//! - **[`core`]**: a persistent, immutable [`Sequence`] for sequences whose
//!   length is only known at runtime. Operations run as explicit loops and
//!   report precondition violations through [`TupleError`].
//!
//! Ambient modules ([`config`], [`logging`]) carry the runtime limits and the
//! development tracing setup.
//!
//! ```
//! use tuplekit::core::ops::{concat, reverse};
//! use tuplekit::seq;
//!
//! let joined = concat(&seq![0, 1, 2], &seq![3, 4]);
//! assert_eq!(reverse(&joined), seq![4, 3, 2, 1, 0]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod hlist;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::config::Limits;
pub use crate::core::sequence::Sequence;
pub use crate::error::{Result, TupleError};
