//! Fraction Value Type
//!
//! Provides the `Fraction` type: an exact rational number stored as a pair of
//! `i64` fields, or NaN when a zero denominator took part in its derivation.
//!
//! # Representation
//!
//! A fraction is either *valid* (numerator and non-zero denominator, stored
//! exactly as given) or *NaN*. Because NaN carries no fields, a NaN value never
//! exposes a stale numerator or denominator.
//!
//! Values are not reduced on construction. Addition, multiplication (and the
//! operators built on them) reduce their result; [`Fraction::reduce`] can be
//! called explicitly at any time.
//!
//! # Examples
//!
//! ```rust
//! use entities_fraction::Fraction;
//!
//! let f = Fraction::new(6, 4);
//! assert_eq!(f.to_string(), "Fraction(6, 4)");
//! assert_eq!(f.reduce().to_string(), "Fraction(3, 2)");
//!
//! assert!(Fraction::new(1, 0).is_nan());
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use malachite::base::num::arithmetic::traits::Gcd;

/// Internal state of a fraction.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Repr {
    /// `denominator` is never zero.
    Valid { numerator: i64, denominator: i64 },
    NaN,
}

/// Exact rational number with fixed-width fields.
///
/// `Fraction` is a small `Copy` value. It is created with [`Fraction::new`],
/// from an integer via `From`, or with `Default` (which yields `0/1`).
///
/// # NaN
///
/// A fraction constructed with a zero denominator is NaN. NaN is contagious:
/// every arithmetic operation with a NaN operand produces NaN. NaN is never
/// equal to anything (itself included), and converting or ordering a NaN
/// fraction fails with a [`FractionError`](crate::FractionError).
///
/// # Examples
///
/// ```rust
/// use entities_fraction::Fraction;
///
/// let half = Fraction::new(1, 2);
/// let third = Fraction::new(1, 3);
/// assert_eq!(half + third, Fraction::new(5, 6));
///
/// let nan = Fraction::new(3, 0);
/// assert!((half + nan).is_nan());
/// assert!(nan != nan);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    pub(crate) repr: Repr,
}

impl Fraction {
    /// The NaN fraction
    pub const NAN: Fraction = Fraction { repr: Repr::NaN };

    /// `0/1`
    pub const ZERO: Fraction = Fraction {
        repr: Repr::Valid { numerator: 0, denominator: 1 },
    };

    /// `1/1`
    pub const ONE: Fraction = Fraction {
        repr: Repr::Valid { numerator: 1, denominator: 1 },
    };

    /// Create a fraction from a numerator and denominator.
    ///
    /// The fields are stored as given, without reduction. A zero denominator
    /// produces NaN.
    ///
    /// # Arguments
    ///
    /// * `numerator` - The numerator of the fraction
    /// * `denominator` - The denominator of the fraction
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(2, 4).numerator(), Some(2));
    /// assert!(Fraction::new(2, 0).is_nan());
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            tracing::trace!(numerator, "zero denominator, fraction is NaN");
            return Self::NAN;
        }
        Self {
            repr: Repr::Valid { numerator, denominator },
        }
    }

    /// Check if the fraction is NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::NaN)
    }

    /// The stored numerator, or `None` for NaN.
    pub fn numerator(&self) -> Option<i64> {
        self.parts().map(|(n, _)| n)
    }

    /// The stored denominator, or `None` for NaN.
    pub fn denominator(&self) -> Option<i64> {
        self.parts().map(|(_, d)| d)
    }

    pub(crate) fn parts(&self) -> Option<(i64, i64)> {
        match self.repr {
            Repr::Valid { numerator, denominator } => Some((numerator, denominator)),
            Repr::NaN => None,
        }
    }

    /// Swap numerator and denominator.
    ///
    /// The result goes through [`Fraction::new`], so the reciprocal of a
    /// zero-valued fraction is NaN. The reciprocal of NaN is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(2, 3).reciprocal().to_string(), "Fraction(3, 2)");
    /// assert!(Fraction::new(0, 5).reciprocal().is_nan());
    /// ```
    pub fn reciprocal(&self) -> Self {
        match self.repr {
            Repr::Valid { numerator, denominator } => Self::new(denominator, numerator),
            Repr::NaN => Self::NAN,
        }
    }

    /// Reduce the fraction to lowest terms.
    ///
    /// Both fields are divided by their greatest common divisor and the sign
    /// is moved to the numerator, so a reduced fraction always has a positive
    /// denominator. NaN reduces to NaN.
    ///
    /// # Panics
    ///
    /// Panics if moving the sign overflows `i64` (numerator `i64::MIN` over an
    /// odd negative denominator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(6, 4).reduce().to_string(), "Fraction(3, 2)");
    /// assert_eq!(Fraction::new(3, -6).reduce().to_string(), "Fraction(-1, 2)");
    /// ```
    pub fn reduce(&self) -> Self {
        let (numerator, denominator) = match self.repr {
            Repr::Valid { numerator, denominator } => (numerator, denominator),
            Repr::NaN => return Self::NAN,
        };

        // gcd is at least 1 since denominator != 0; 2^63 wraps to i64::MIN,
        // which still divides both fields exactly
        let g = numerator.unsigned_abs().gcd(denominator.unsigned_abs()) as i64;
        let mut numerator = numerator / g;
        let mut denominator = denominator / g;

        if denominator < 0 {
            numerator = numerator.checked_neg().unwrap_or_else(|| overflow());
            denominator = denominator.checked_neg().unwrap_or_else(|| overflow());
        }

        Self {
            repr: Repr::Valid { numerator, denominator },
        }
    }
}

/// Fixed-width overflow is a contract violation, not a recoverable error.
#[cold]
pub(crate) fn overflow() -> ! {
    panic!("fraction arithmetic overflowed i64")
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self {
            repr: Repr::Valid { numerator: value, denominator: 1 },
        }
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.repr {
            Repr::Valid { numerator, denominator } => {
                write!(f, "Fraction({}, {})", numerator, denominator)
            }
            Repr::NaN => write!(f, "NaN"),
        }
    }
}
