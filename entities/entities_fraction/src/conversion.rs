//! Fraction Conversions
//!
//! Fallible conversions from [`Fraction`] to `i32`, `i64`, `f32` and `f64`,
//! and the lossy float bridge used when a fraction meets a floating-point
//! operand.
//!
//! ## Integral conversions
//!
//! The quotient is truncated toward zero (`numerator / denominator` in native
//! integer division), so `7/2` converts to `3` and `-7/2` to `-3`.
//!
//! ## Float bridge
//!
//! Arithmetic between a fraction and an `f32`/`f64` converts the fraction to
//! the float type first and continues in native float arithmetic. The result
//! is a float, not a fraction, and precision is lost. A NaN fraction fails
//! with `FractionError::NanConversion` rather than producing a float NaN.

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

use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;

pub(crate) fn nan_conversion(into: &'static str) -> FractionError {
    tracing::debug!(into, "NaN conversion");
    FractionError::NanConversion
}

impl Fraction {
    /// Convert to `i64`, truncating toward zero.
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The truncated quotient
    /// * `Err(FractionError::NanConversion)` - The fraction is NaN
    /// * `Err(FractionError::OutOfRange)` - `i64::MIN / -1`
    pub fn to_i64(&self) -> FractionResult<i64> {
        let (numerator, denominator) = self.parts().ok_or_else(|| nan_conversion("i64"))?;
        numerator
            .checked_div(denominator)
            .ok_or(FractionError::OutOfRange)
    }

    /// Convert to `i32`, truncating toward zero.
    ///
    /// Fails with `FractionError::OutOfRange` when the quotient does not fit.
    pub fn to_i32(&self) -> FractionResult<i32> {
        let (numerator, denominator) = self.parts().ok_or_else(|| nan_conversion("i32"))?;
        numerator
            .checked_div(denominator)
            .and_then(|quotient| i32::try_from(quotient).ok())
            .ok_or(FractionError::OutOfRange)
    }

    /// Convert to `f64` by floating-point division of the fields.
    pub fn to_f64(&self) -> FractionResult<f64> {
        let (numerator, denominator) = self.parts().ok_or_else(|| nan_conversion("f64"))?;
        Ok(numerator as f64 / denominator as f64)
    }

    /// Convert to `f32` by floating-point division of the fields.
    pub fn to_f32(&self) -> FractionResult<f32> {
        let (numerator, denominator) = self.parts().ok_or_else(|| nan_conversion("f32"))?;
        Ok(numerator as f32 / denominator as f32)
    }
}

macro_rules! try_from_fraction {
    ($($t:ty => $method:ident),*) => {$(
        impl TryFrom<Fraction> for $t {
            type Error = FractionError;

            fn try_from(value: Fraction) -> FractionResult<$t> {
                value.$method()
            }
        }
    )*};
}

try_from_fraction!(i32 => to_i32, i64 => to_i64, f32 => to_f32, f64 => to_f64);

/// Floating-point types a fraction can be bridged into.
///
/// Implemented for `f32` and `f64`. The provided methods put the float on the
/// left-hand side of the operation (`k + f`, `k - f`, ...).
///
/// # Examples
///
/// ```rust
/// use entities_fraction::{FloatScalar, Fraction};
///
/// let f = Fraction::new(1, 4);
/// assert_eq!(f.add_float(0.5f64), Ok(0.75));
/// assert_eq!(1.0f64.sub_fraction(f), Ok(0.75));
/// ```
pub trait FloatScalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Convert a fraction into this float type.
    fn from_fraction(value: Fraction) -> FractionResult<Self>;

    /// `self + rhs`
    fn add_fraction(self, rhs: Fraction) -> FractionResult<Self> {
        rhs.add_float(self)
    }

    /// `self - rhs`
    fn sub_fraction(self, rhs: Fraction) -> FractionResult<Self> {
        rhs.float_sub(self)
    }

    /// `self * rhs`
    fn mul_fraction(self, rhs: Fraction) -> FractionResult<Self> {
        rhs.mul_float(self)
    }

    /// `self / rhs`
    fn div_fraction(self, rhs: Fraction) -> FractionResult<Self> {
        rhs.float_div(self)
    }
}

impl FloatScalar for f32 {
    fn from_fraction(value: Fraction) -> FractionResult<f32> {
        value.to_f32()
    }
}

impl FloatScalar for f64 {
    fn from_fraction(value: Fraction) -> FractionResult<f64> {
        value.to_f64()
    }
}

impl Fraction {
    /// `self + rhs` in float arithmetic.
    pub fn add_float<F: FloatScalar>(self, rhs: F) -> FractionResult<F> {
        Ok(F::from_fraction(self)? + rhs)
    }

    /// `self - rhs` in float arithmetic.
    pub fn sub_float<F: FloatScalar>(self, rhs: F) -> FractionResult<F> {
        Ok(F::from_fraction(self)? - rhs)
    }

    /// `self * rhs` in float arithmetic.
    pub fn mul_float<F: FloatScalar>(self, rhs: F) -> FractionResult<F> {
        Ok(F::from_fraction(self)? * rhs)
    }

    /// `self / rhs` in float arithmetic.
    pub fn div_float<F: FloatScalar>(self, rhs: F) -> FractionResult<F> {
        Ok(F::from_fraction(self)? / rhs)
    }

    /// `self % rhs` in float arithmetic (truncated remainder, as for floats).
    pub fn rem_float<F: FloatScalar>(self, rhs: F) -> FractionResult<F> {
        Ok(F::from_fraction(self)? % rhs)
    }

    /// `lhs - self` in float arithmetic, computed as `-self + lhs`.
    pub fn float_sub<F: FloatScalar>(self, lhs: F) -> FractionResult<F> {
        (-self).add_float(lhs)
    }

    /// `lhs / self` in float arithmetic.
    pub fn float_div<F: FloatScalar>(self, lhs: F) -> FractionResult<F> {
        Ok(lhs / F::from_fraction(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_integer_truncates_toward_zero() {
        assert_eq!(Fraction::new(7, 2).to_i64(), Ok(3));
        assert_eq!(Fraction::new(-7, 2).to_i64(), Ok(-3));
        assert_eq!(Fraction::new(7, -2).to_i32(), Ok(-3));
        assert_eq!(Fraction::new(1, 3).to_i32(), Ok(0));
    }

    #[test]
    fn test_to_float() {
        assert_eq!(Fraction::new(7, 2).to_f64(), Ok(3.5));
        assert_eq!(Fraction::new(-1, 4).to_f32(), Ok(-0.25));
        assert!((Fraction::new(1, 3).to_f64().unwrap() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_nan_conversion_fails() {
        let nan = Fraction::new(1, 0);
        assert_eq!(nan.to_i32(), Err(FractionError::NanConversion));
        assert_eq!(nan.to_i64(), Err(FractionError::NanConversion));
        assert_eq!(nan.to_f32(), Err(FractionError::NanConversion));
        assert_eq!(nan.to_f64(), Err(FractionError::NanConversion));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Fraction::from(i64::MAX).to_i32(), Err(FractionError::OutOfRange));
        assert_eq!(Fraction::new(i64::MIN, -1).to_i64(), Err(FractionError::OutOfRange));
        assert_eq!(Fraction::from(i64::MAX).to_i64(), Ok(i64::MAX));
    }

    #[test]
    fn test_try_from() {
        assert_eq!(i64::try_from(Fraction::new(7, 2)), Ok(3));
        assert_eq!(i32::try_from(Fraction::new(9, 3)), Ok(3));
        assert_eq!(f64::try_from(Fraction::new(7, 2)), Ok(3.5));
        assert_eq!(f32::try_from(Fraction::new(1, 2)), Ok(0.5));
        assert_eq!(f64::try_from(Fraction::NAN), Err(FractionError::NanConversion));
    }

    #[test]
    fn test_float_bridge() {
        let f = Fraction::new(1, 2);
        assert_eq!(f.add_float(0.25f64), Ok(0.75));
        assert_eq!(f.sub_float(0.25f64), Ok(0.25));
        assert_eq!(f.mul_float(3.0f32), Ok(1.5));
        assert_eq!(f.div_float(0.25f64), Ok(2.0));
        assert_eq!(Fraction::new(7, 2).rem_float(2.0f64), Ok(1.5));
    }

    #[test]
    fn test_float_bridge_commuted() {
        let f = Fraction::new(1, 4);
        assert_eq!(f.float_sub(1.0f64), Ok(0.75));
        assert_eq!(f.float_div(1.0f64), Ok(4.0));
        assert_eq!(2.0f64.add_fraction(f), Ok(2.25));
        assert_eq!(1.0f32.sub_fraction(f), Ok(0.75));
        assert_eq!(2.0f64.mul_fraction(f), Ok(0.5));
        assert_eq!(1.0f64.div_fraction(f), Ok(4.0));
    }

    #[test]
    fn test_float_bridge_nan_fails() {
        let nan = Fraction::NAN;
        assert_eq!(nan.add_float(1.0f64), Err(FractionError::NanConversion));
        assert_eq!(nan.float_div(1.0f32), Err(FractionError::NanConversion));
        assert_eq!(1.0f64.sub_fraction(nan), Err(FractionError::NanConversion));
    }
}
