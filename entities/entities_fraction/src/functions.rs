//! Fraction Functions
//!
//! Power, floor, ceiling, absolute value and string rendering, both as
//! inherent methods on [`Fraction`] and as free functions.

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

use malachite::base::num::arithmetic::traits::DivRound;
use malachite::base::rounding_modes::RoundingMode;

use crate::conversion::nan_conversion;
use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;

impl Fraction {
    /// Raise the fraction to an integer power.
    ///
    /// For a negative exponent the reciprocal is taken first. Numerator and
    /// denominator are each raised to `|exponent|`; the result is not reduced.
    ///
    /// Exponentiation goes through `f64` and is narrowed back to `i64`, so
    /// results beyond 2^53 lose precision and results beyond `i64` saturate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(2, 3).pow(-2), Fraction::new(9, 4));
    /// assert!(Fraction::new(0, 1).pow(-1).is_nan());
    /// ```
    pub fn pow(&self, exponent: i32) -> Fraction {
        let base = if exponent >= 0 { *self } else { self.reciprocal() };
        let exponent = f64::from(exponent.unsigned_abs());

        match base.parts() {
            Some((numerator, denominator)) => Fraction::new(
                (numerator as f64).powf(exponent) as i64,
                (denominator as f64).powf(exponent) as i64,
            ),
            None => Fraction::NAN,
        }
    }

    /// Largest integer not greater than the fraction.
    ///
    /// Fails with `FractionError::NanConversion` for NaN and
    /// `FractionError::OutOfRange` for `i64::MIN / -1`.
    pub fn floor(&self) -> FractionResult<i64> {
        self.rounded_quotient(RoundingMode::Floor, "floor")
    }

    /// Smallest integer not less than the fraction.
    ///
    /// Fails with `FractionError::NanConversion` for NaN and
    /// `FractionError::OutOfRange` for `i64::MIN / -1`.
    pub fn ceil(&self) -> FractionResult<i64> {
        self.rounded_quotient(RoundingMode::Ceiling, "ceiling")
    }

    fn rounded_quotient(&self, mode: RoundingMode, into: &'static str) -> FractionResult<i64> {
        let (numerator, denominator) = self.parts().ok_or_else(|| nan_conversion(into))?;
        // the only quotient of two i64 values that does not fit is i64::MIN / -1
        if numerator.checked_div(denominator).is_none() {
            return Err(FractionError::OutOfRange);
        }
        Ok(numerator.div_round(denominator, mode).0)
    }

    /// Absolute value: `self` if `self >= 0`, otherwise `-self`.
    ///
    /// Fails with `FractionError::NanOrdering` for NaN.
    pub fn abs(&self) -> FractionResult<Fraction> {
        if self.try_ge(0)? {
            Ok(*self)
        } else {
            Ok(-*self)
        }
    }
}

/// Raise `a` to the power `p`. See [`Fraction::pow`].
pub fn power(a: Fraction, p: i32) -> Fraction {
    a.pow(p)
}

/// Mathematical floor of `a`. See [`Fraction::floor`].
pub fn floor(a: Fraction) -> FractionResult<i64> {
    a.floor()
}

/// Mathematical ceiling of `a`. See [`Fraction::ceil`].
pub fn ceiling(a: Fraction) -> FractionResult<i64> {
    a.ceil()
}

/// Absolute value of `a`. See [`Fraction::abs`].
pub fn absolute(a: Fraction) -> FractionResult<Fraction> {
    a.abs()
}

/// Render `a` as `"Fraction(<numerator>, <denominator>)"`, or `"NaN"`.
pub fn to_string(a: Fraction) -> String {
    a.to_string()
}
