//! Entities Layer: Fraction
//!
//! Provides an exact rational value type with fixed-width fields and an
//! explicit NaN state.
//!
//! ## Overview
//!
//! The `entities_fraction` crate is part of the entities layer. It has no
//! dependencies on other crates in the workspace. A [`Fraction`] is a
//! numerator/denominator pair of `i64` values, or NaN when a zero denominator
//! took part in its derivation.
//!
//! ## Modules
//!
//! - **[`fraction`](fraction/index.html)**: The `Fraction` type, construction,
//!   `reciprocal`, `reduce` and `Display`.
//!
//! - **[`arithmetic`](arithmetic/index.html)**: `+`, `-`, `*`, `/`, `%`, unary
//!   negation and the compound assignment operators, for fraction and integer
//!   operands on either side.
//!
//! - **[`comparison`](comparison/index.html)**: Equality (never fails) and
//!   ordering (fails on NaN).
//!
//! - **[`conversion`](conversion/index.html)**: Conversions to `i32`, `i64`,
//!   `f32`, `f64` and the lossy float bridge (`FloatScalar`).
//!
//! - **[`functions`](functions/index.html)**: `power`, `floor`, `ceiling`,
//!   `absolute` and `to_string`.
//!
//! ## NaN
//!
//! NaN propagates through arithmetic and is never equal to anything. Where a
//! NaN would have to become a concrete number (conversion, ordering, floor,
//! ceiling) the operation returns a [`FractionError`].
//!
//! ## Usage
//!
//! ```rust
//! use entities_fraction::{floor, power, Fraction, FractionError};
//!
//! let a = Fraction::new(2, 3);
//! let b = Fraction::new(1, 2);
//!
//! assert_eq!(a % b, Fraction::new(1, 6));
//! assert_eq!(power(a, -2), Fraction::new(9, 4));
//! assert_eq!(floor(Fraction::new(-1, 2)), Ok(-1));
//!
//! let nan = a / Fraction::ZERO;
//! assert!(nan.is_nan());
//! assert_eq!(nan.try_lt(a), Err(FractionError::NanOrdering));
//! ```

pub mod arithmetic;
pub mod comparison;
pub mod conversion;
pub mod error;
pub mod fraction;
pub mod functions;

pub use conversion::FloatScalar;
pub use error::{FractionError, FractionResult};
pub use fraction::Fraction;
pub use functions::{absolute, ceiling, floor, power, to_string};
