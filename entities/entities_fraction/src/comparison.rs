//! Fraction Comparison
//!
//! Equality and ordering for [`Fraction`].
//!
//! Equality and ordering treat NaN differently:
//!
//! - **Equality** (`==`, `!=`) never fails. NaN is never equal to anything,
//!   itself included, so `nan == nan` is `false` and `nan != nan` is `true`.
//! - **Ordering** has no meaning for NaN. `Fraction` does not implement
//!   `PartialOrd`; the `try_*` methods return `FractionError::NanOrdering`
//!   instead of an arbitrary boolean.

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

use std::cmp::Ordering;

use crate::conversion::FloatScalar;
use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;

/// Cross products `(n1 * d2, n2 * d1)` widened to `i128`, plus whether the
/// denominators have opposite signs. `None` if either side is NaN.
fn cross_products(lhs: &Fraction, rhs: &Fraction) -> Option<(i128, i128, bool)> {
    let (n1, d1) = lhs.parts()?;
    let (n2, d2) = rhs.parts()?;
    let left = i128::from(n1) * i128::from(d2);
    let right = i128::from(n2) * i128::from(d1);
    Some((left, right, (d1 < 0) != (d2 < 0)))
}

impl PartialEq for Fraction {
    /// Equal in lowest terms, compared by cross multiplication so no
    /// intermediate can overflow. NaN is never equal.
    fn eq(&self, other: &Fraction) -> bool {
        match cross_products(self, other) {
            Some((left, right, _)) => left == right,
            None => false,
        }
    }
}

macro_rules! exact_scalar_eq {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Fraction {
            fn eq(&self, other: &$t) -> bool {
                *self == Fraction::from(*other)
            }
        }

        impl PartialEq<Fraction> for $t {
            fn eq(&self, other: &Fraction) -> bool {
                other == self
            }
        }
    )*};
}

exact_scalar_eq!(i32, i64);

macro_rules! float_scalar_eq {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Fraction {
            fn eq(&self, other: &$t) -> bool {
                <$t>::from_fraction(*self).map_or(false, |value| value == *other)
            }
        }

        impl PartialEq<Fraction> for $t {
            fn eq(&self, other: &Fraction) -> bool {
                other == self
            }
        }
    )*};
}

float_scalar_eq!(f32, f64);

impl Fraction {
    /// Order two fractions.
    ///
    /// The right-hand side can be a `Fraction`, `i32` or `i64`. The sign of
    /// the difference decides the order. It is taken from the cross products
    /// in `i128`, so ordering is total on valid fractions and never
    /// overflows.
    ///
    /// # Returns
    ///
    /// * `Ok(Ordering)` - The order of `self` relative to `other`
    /// * `Err(FractionError::NanOrdering)` - Either side is NaN
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use entities_fraction::{Fraction, FractionError};
    ///
    /// assert_eq!(Fraction::new(1, 3).try_cmp(Fraction::new(1, 2)), Ok(Ordering::Less));
    /// assert_eq!(Fraction::new(4, 2).try_cmp(2), Ok(Ordering::Equal));
    /// assert_eq!(Fraction::NAN.try_cmp(0), Err(FractionError::NanOrdering));
    /// ```
    pub fn try_cmp<T: Into<Fraction>>(&self, other: T) -> FractionResult<Ordering> {
        let other = other.into();
        match cross_products(self, &other) {
            // n1/d1 - n2/d2 has the sign of (n1*d2 - n2*d1) * d1 * d2
            Some((left, right, false)) => Ok(left.cmp(&right)),
            Some((left, right, true)) => Ok(right.cmp(&left)),
            None => {
                tracing::debug!(lhs = %self, rhs = %other, "ordering comparison with NaN");
                Err(FractionError::NanOrdering)
            }
        }
    }

    /// `self < other`, failing on NaN.
    pub fn try_lt<T: Into<Fraction>>(&self, other: T) -> FractionResult<bool> {
        self.try_cmp(other).map(|ord| ord == Ordering::Less)
    }

    /// `self <= other`, failing on NaN.
    pub fn try_le<T: Into<Fraction>>(&self, other: T) -> FractionResult<bool> {
        self.try_cmp(other).map(|ord| ord != Ordering::Greater)
    }

    /// `self > other`, failing on NaN.
    pub fn try_gt<T: Into<Fraction>>(&self, other: T) -> FractionResult<bool> {
        self.try_cmp(other).map(|ord| ord == Ordering::Greater)
    }

    /// `self >= other`, failing on NaN.
    pub fn try_ge<T: Into<Fraction>>(&self, other: T) -> FractionResult<bool> {
        self.try_cmp(other).map(|ord| ord != Ordering::Less)
    }

    /// Order a fraction against a floating-point value.
    ///
    /// The fraction is converted to `F` first, so this is subject to the
    /// precision of the float type.
    ///
    /// # Returns
    ///
    /// * `Ok(Ordering)` - The order of `self` relative to `other`
    /// * `Err(FractionError::NanConversion)` - `self` is NaN
    /// * `Err(FractionError::Unordered)` - `other` is a float NaN
    pub fn try_cmp_float<F: FloatScalar>(&self, other: F) -> FractionResult<Ordering> {
        F::from_fraction(*self)?
            .partial_cmp(&other)
            .ok_or(FractionError::Unordered)
    }

    /// `self < other` through the float bridge.
    pub fn try_lt_float<F: FloatScalar>(&self, other: F) -> FractionResult<bool> {
        self.try_cmp_float(other).map(|ord| ord == Ordering::Less)
    }

    /// `self <= other` through the float bridge.
    pub fn try_le_float<F: FloatScalar>(&self, other: F) -> FractionResult<bool> {
        self.try_cmp_float(other).map(|ord| ord != Ordering::Greater)
    }

    /// `self > other` through the float bridge.
    pub fn try_gt_float<F: FloatScalar>(&self, other: F) -> FractionResult<bool> {
        self.try_cmp_float(other).map(|ord| ord == Ordering::Greater)
    }

    /// `self >= other` through the float bridge.
    pub fn try_ge_float<F: FloatScalar>(&self, other: F) -> FractionResult<bool> {
        self.try_cmp_float(other).map(|ord| ord != Ordering::Less)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_compares_reduced_forms() {
        assert_eq!(Fraction::new(6, 4), Fraction::new(3, 2));
        assert_eq!(Fraction::new(-1, -2), Fraction::new(1, 2));
        assert_eq!(Fraction::new(1, -2), Fraction::new(-1, 2));
        assert_ne!(Fraction::new(1, 2), Fraction::new(1, 3));
    }

    #[test]
    fn test_nan_never_equal() {
        let nan = Fraction::new(1, 0);
        assert!(!(nan == nan));
        assert!(nan != nan);
        assert!(nan != Fraction::ZERO);
        assert!(Fraction::ZERO != nan);
        assert!(nan != 0);
        assert!(nan != 0.0f64);
    }

    #[test]
    fn test_eq_integers() {
        assert!(Fraction::new(8, 4) == 2);
        assert!(Fraction::new(-8, 4) == -2i64);
        assert!(2 == Fraction::new(8, 4));
        assert!(3i64 != Fraction::new(8, 4));
        assert!(Fraction::new(1, 2) != 0);
    }

    #[test]
    fn test_eq_floats() {
        assert!(Fraction::new(7, 2) == 3.5f64);
        assert!(Fraction::new(1, 4) == 0.25f32);
        assert!(0.5f64 == Fraction::new(2, 4));
        assert!(Fraction::new(1, 3) != 0.3f64);
    }

    #[test]
    fn test_try_cmp() {
        let third = Fraction::new(1, 3);
        let half = Fraction::new(1, 2);
        assert_eq!(third.try_cmp(half), Ok(Ordering::Less));
        assert_eq!(half.try_cmp(third), Ok(Ordering::Greater));
        assert_eq!(half.try_cmp(Fraction::new(2, 4)), Ok(Ordering::Equal));
    }

    #[test]
    fn test_try_cmp_negative_denominators() {
        // -1/2 written with the sign on the denominator
        let f = Fraction::new(1, -2);
        assert_eq!(f.try_cmp(0), Ok(Ordering::Less));
        assert_eq!(Fraction::new(-1, -2).try_cmp(Fraction::new(1, 3)), Ok(Ordering::Greater));
    }

    #[test]
    fn test_relational_helpers() {
        let f = Fraction::new(3, 4);
        assert_eq!(f.try_lt(1), Ok(true));
        assert_eq!(f.try_le(Fraction::new(6, 8)), Ok(true));
        assert_eq!(f.try_gt(0i64), Ok(true));
        assert_eq!(f.try_ge(1), Ok(false));
    }

    #[test]
    fn test_ordering_nan_fails() {
        let nan = Fraction::new(5, 0);
        assert_eq!(nan.try_lt(Fraction::ONE), Err(FractionError::NanOrdering));
        assert_eq!(Fraction::ONE.try_lt(nan), Err(FractionError::NanOrdering));
        assert_eq!(nan.try_ge(0), Err(FractionError::NanOrdering));
        assert_eq!(nan.try_cmp(nan), Err(FractionError::NanOrdering));
    }

    #[test]
    fn test_eq_extreme_values_does_not_panic() {
        // reducing i64::MIN over an odd negative denominator cannot move the sign
        let f = Fraction::new(i64::MIN, -3);
        assert!(f != Fraction::new(1, 2));
        assert!(f == f);
        assert!(Fraction::new(i64::MIN, -1) != Fraction::from(i64::MAX));
        assert!(Fraction::new(i64::MIN, i64::MIN) == 1);
        assert!(Fraction::new(i64::MAX, i64::MAX - 1) == Fraction::new(-i64::MAX, -(i64::MAX - 1)));
    }

    #[test]
    fn test_try_cmp_extreme_values() {
        let a = Fraction::new(1, i64::MAX);
        let b = Fraction::new(1, i64::MAX - 1);
        assert_eq!(a.try_cmp(b), Ok(Ordering::Less));
        assert_eq!(b.try_cmp(a), Ok(Ordering::Greater));
        assert_eq!(Fraction::new(i64::MIN, -3).try_cmp(0), Ok(Ordering::Greater));
        assert_eq!(Fraction::new(i64::MIN, 1).try_cmp(i64::MAX), Ok(Ordering::Less));
        assert_eq!(Fraction::new(1, -i64::MAX).try_cmp(Fraction::new(-1, i64::MAX)), Ok(Ordering::Equal));
    }

    #[test]
    fn test_try_cmp_float() {
        let f = Fraction::new(1, 3);
        assert_eq!(f.try_cmp_float(0.5f64), Ok(Ordering::Less));
        assert_eq!(f.try_gt_float(0.25f32), Ok(true));
        assert_eq!(f.try_le_float(0.0f64), Ok(false));
        assert_eq!(f.try_ge_float(f64::NEG_INFINITY), Ok(true));
        assert_eq!(f.try_lt_float(f64::NAN), Err(FractionError::Unordered));
        assert_eq!(Fraction::NAN.try_lt_float(1.0f64), Err(FractionError::NanConversion));
    }
}
