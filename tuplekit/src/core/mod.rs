//! Runtime sequence algebra.
//!
//! Core modules are free of I/O side effects. They operate on immutable
//! in-memory sequences and return deterministic outputs suitable for tests.

pub mod count;
pub mod ops;
pub mod sequence;
