//! Validation of repeat counts supplied as arbitrary numeric types.

use crate::error::{Result, TupleError};

/// Conversion of a caller-supplied count into a non-negative integer.
///
/// Negative, fractional, and non-finite values are rejected with
/// [`TupleError::InvalidCount`] instead of being clamped or truncated.
pub trait IntoCount {
    fn into_count(self) -> Result<usize>;
}

fn invalid(count: impl ToString, reason: &'static str) -> TupleError {
    TupleError::InvalidCount {
        count: count.to_string(),
        reason,
    }
}

macro_rules! unsigned_counts {
    ($($ty:ty),*) => {
        $(
            impl IntoCount for $ty {
                fn into_count(self) -> Result<usize> {
                    usize::try_from(self).map_err(|_| invalid(self, "too large for this platform"))
                }
            }
        )*
    };
}

macro_rules! signed_counts {
    ($($ty:ty),*) => {
        $(
            impl IntoCount for $ty {
                fn into_count(self) -> Result<usize> {
                    if self < 0 {
                        return Err(invalid(self, "must be >= 0"));
                    }
                    usize::try_from(self).map_err(|_| invalid(self, "too large for this platform"))
                }
            }
        )*
    };
}

macro_rules! float_counts {
    ($($ty:ty),*) => {
        $(
            impl IntoCount for $ty {
                fn into_count(self) -> Result<usize> {
                    if !self.is_finite() {
                        return Err(invalid(self, "must be finite"));
                    }
                    if self < 0.0 {
                        return Err(invalid(self, "must be >= 0"));
                    }
                    if self.fract() != 0.0 {
                        return Err(invalid(self, "must be an integer"));
                    }
                    if f64::from(self) >= usize::MAX as f64 {
                        return Err(invalid(self, "too large for this platform"));
                    }
                    Ok(self as usize)
                }
            }
        )*
    };
}

unsigned_counts!(u8, u16, u32, u64, usize);
signed_counts!(i8, i16, i32, i64, isize);
float_counts!(f32, f64);
