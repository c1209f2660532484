//! Fraction Arithmetic
//!
//! Implements the arithmetic operators for [`Fraction`].
//!
//! The compound assignment operators (`+=`, `-=`, `*=`, `/=`, `%=`) between two
//! fractions are the canonical implementations. Every binary operator copies
//! its left operand, applies the compound operator and returns the copy.
//!
//! ## Reduction
//!
//! Addition and multiplication reduce their result. Subtraction, division and
//! modulo are built on them and inherit the reduction.
//!
//! ## Exact scalars
//!
//! `i32` and `i64` operands are promoted to `Fraction::from(k)` and delegated
//! to the fraction implementation, in both operand positions. Floating-point
//! operands go through the lossy float bridge in
//! [`conversion`](crate::conversion) instead.
//!
//! ## Overflow
//!
//! Fields are fixed-width. An intermediate product, sum or common denominator
//! that does not fit in `i64` panics.

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

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use malachite::base::num::arithmetic::traits::CheckedLcm;

use crate::fraction::{overflow, Fraction, Repr};

fn mul_i64(a: i64, b: i64) -> i64 {
    a.checked_mul(b).unwrap_or_else(|| overflow())
}

fn add_i64(a: i64, b: i64) -> i64 {
    a.checked_add(b).unwrap_or_else(|| overflow())
}

/// Least common multiple of two non-zero denominators, always positive.
fn common_denominator(a: i64, b: i64) -> i64 {
    a.unsigned_abs()
        .checked_lcm(b.unsigned_abs())
        .and_then(|l| i64::try_from(l).ok())
        .unwrap_or_else(|| overflow())
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Fraction) {
        *self = match (self.parts(), rhs.parts()) {
            (Some((n1, d1)), Some((n2, d2))) => {
                let l = common_denominator(d1, d2);
                // l / d carries the denominator's sign onto the numerator
                let numerator = add_i64(mul_i64(n1, l / d1), mul_i64(n2, l / d2));
                Fraction::new(numerator, l).reduce()
            }
            _ => Fraction::NAN,
        };
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Fraction) {
        *self += -rhs;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Fraction) {
        *self = match (self.parts(), rhs.parts()) {
            (Some((n1, d1)), Some((n2, d2))) => {
                Fraction::new(mul_i64(n1, n2), mul_i64(d1, d2)).reduce()
            }
            _ => Fraction::NAN,
        };
    }
}

impl DivAssign for Fraction {
    fn div_assign(&mut self, rhs: Fraction) {
        *self *= rhs.reciprocal();
    }
}

impl RemAssign for Fraction {
    /// Floored modulo: `self - floor(self / rhs) * rhs`.
    ///
    /// The result has the sign of `rhs`. A NaN operand or a zero divisor
    /// yields NaN.
    fn rem_assign(&mut self, rhs: Fraction) {
        *self = match (*self / rhs).floor() {
            Ok(quotient) => *self - Fraction::from(quotient) * rhs,
            Err(_) => Fraction::NAN,
        };
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    /// Flip the sign of the numerator. The denominator is unchanged.
    fn neg(self) -> Fraction {
        match self.repr {
            Repr::Valid { numerator, denominator } => Fraction {
                repr: Repr::Valid {
                    numerator: numerator.checked_neg().unwrap_or_else(|| overflow()),
                    denominator,
                },
            },
            Repr::NaN => Fraction::NAN,
        }
    }
}

macro_rules! binary_from_assign {
    ($Rhs:ty, $Trait:ident, $method:ident, $op:tt) => {
        impl $Trait<$Rhs> for Fraction {
            type Output = Fraction;

            fn $method(mut self, rhs: $Rhs) -> Fraction {
                self $op rhs;
                self
            }
        }
    };
}

binary_from_assign!(Fraction, Add, add, +=);
binary_from_assign!(Fraction, Sub, sub, -=);
binary_from_assign!(Fraction, Mul, mul, *=);
binary_from_assign!(Fraction, Div, div, /=);
binary_from_assign!(Fraction, Rem, rem, %=);

macro_rules! exact_scalar_ops {
    ($($t:ty),*) => {$(
        impl AddAssign<$t> for Fraction {
            fn add_assign(&mut self, rhs: $t) {
                *self += Fraction::from(rhs);
            }
        }

        impl SubAssign<$t> for Fraction {
            fn sub_assign(&mut self, rhs: $t) {
                *self -= Fraction::from(rhs);
            }
        }

        impl MulAssign<$t> for Fraction {
            fn mul_assign(&mut self, rhs: $t) {
                *self *= Fraction::from(rhs);
            }
        }

        impl DivAssign<$t> for Fraction {
            fn div_assign(&mut self, rhs: $t) {
                *self /= Fraction::from(rhs);
            }
        }

        impl RemAssign<$t> for Fraction {
            fn rem_assign(&mut self, rhs: $t) {
                *self %= Fraction::from(rhs);
            }
        }

        binary_from_assign!($t, Add, add, +=);
        binary_from_assign!($t, Sub, sub, -=);
        binary_from_assign!($t, Mul, mul, *=);
        binary_from_assign!($t, Div, div, /=);
        binary_from_assign!($t, Rem, rem, %=);

        impl Add<Fraction> for $t {
            type Output = Fraction;

            fn add(self, rhs: Fraction) -> Fraction {
                rhs + self
            }
        }

        impl Sub<Fraction> for $t {
            type Output = Fraction;

            fn sub(self, rhs: Fraction) -> Fraction {
                -rhs + self
            }
        }

        impl Mul<Fraction> for $t {
            type Output = Fraction;

            fn mul(self, rhs: Fraction) -> Fraction {
                rhs * self
            }
        }

        impl Div<Fraction> for $t {
            type Output = Fraction;

            fn div(self, rhs: Fraction) -> Fraction {
                Fraction::from(self) / rhs
            }
        }

        impl Rem<Fraction> for $t {
            type Output = Fraction;

            fn rem(self, rhs: Fraction) -> Fraction {
                Fraction::from(self) % rhs
            }
        }
    )*};
}

exact_scalar_ops!(i32, i64);

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::ZERO, |acc, f| acc + f)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::ONE, |acc, f| acc * f)
    }
}
