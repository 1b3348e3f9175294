//! The `Cost` scalar.

use std::fmt;
use std::ops::{Add, Mul};

/// A traversal cost: a non-negative finite number, or [`Cost::IMPASSABLE`].
///
/// Never negative and never NaN.  Arithmetic saturates at impassable.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const IMPASSABLE: Cost = Cost(f64::INFINITY);

    /// Wrap a raw weight.  NaN and `+∞` both become [`IMPASSABLE`](Self::IMPASSABLE).
    #[inline]
    pub fn new(value: f64) -> Cost {
        debug_assert!(!(value < 0.0), "negative cost {value}");
        if value.is_nan() { Cost::IMPASSABLE } else { Cost(value.max(0.0)) }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_impassable(self) -> bool {
        self.0.is_infinite()
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        !self.is_impassable()
    }
}

impl Add for Cost {
    type Output = Cost;
    #[inline]
    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl Mul<f64> for Cost {
    type Output = Cost;
    /// Scale by a non-negative factor, such as an edge length.
    #[inline]
    fn mul(self, rhs: f64) -> Cost {
        Cost::new(self.0 * rhs)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Cost {
        Cost::new(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_impassable() { f.write_str("impassable") } else { write!(f, "{:.3}", self.0) }
    }
}
