//! Fraction Error Types
//!
//! Provides the error type returned by every fallible fraction operation.
//! Equality never fails; conversions, ordering, `floor` and `ceiling` do.

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

/// Fraction operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    /// A NaN fraction was converted to an integral or floating-point value
    NanConversion,
    /// A NaN fraction took part in an ordering comparison
    NanOrdering,
    /// The truncated value does not fit in the requested integer type
    OutOfRange,
    /// The floating-point operand has no ordering (float NaN)
    Unordered,
}

impl std::fmt::Display for FractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FractionError::NanConversion => write!(f, "NaN conversion"),
            FractionError::NanOrdering => write!(f, "NaN ordering: NaN fractions have no order"),
            FractionError::OutOfRange => write!(f, "Value out of range for target integer type"),
            FractionError::Unordered => write!(f, "Operand is not comparable"),
        }
    }
}

impl std::error::Error for FractionError {}

/// Result type for fraction operations
pub type FractionResult<T> = Result<T, FractionError>;
