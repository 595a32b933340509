//! Triangular membership functions.

use crate::{FuzzyError, FuzzyResult};

/// Triangle with feet `a`, `c` and peak `b` (`a ≤ b ≤ c`).
///
/// A shoulder is expressed by a zero-width side: `Triangle(0, 0, 6)` is 1 at
/// 0 and falls to 0 at 6.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> FuzzyResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(FuzzyError::InvalidMembership(format!(
                "non-finite vertex in ({a}, {b}, {c})"
            )));
        }
        if !(a <= b && b <= c) || a == c {
            return Err(FuzzyError::InvalidMembership(format!(
                "need a <= b <= c with a < c, got ({a}, {b}, {c})"
            )));
        }
        Ok(Self { a, b, c })
    }

    #[inline]
    pub fn peak(&self) -> f64 {
        self.b
    }

    /// Support interval `[a, c]`.
    #[inline]
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }

    /// Degree of membership of `x`, in `[0, 1]`.
    pub fn membership(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;
        if x < a || x > c {
            0.0
        } else if x <= b {
            if b == a { 1.0 } else { (x - a) / (b - a) }
        } else if c == b {
            1.0
        } else {
            (c - x) / (c - b)
        }
    }
}
