//! # decinterval
//!
//! Exact, arbitrary-precision decimal interval arithmetic: numeric ranges with
//! optional open/closed bounds, intersection, membership testing, and
//! digit-range analysis, with no binary floating-point step anywhere.
//!
//! The crate is built from two value types:
//!
//! - [`Decimal`]: an exact base-10 number stored in canonical form (no
//!   trailing fractional zeros, no redundant leading zeros). Comparisons and
//!   truncating arithmetic take an explicit scale, and every call site derives
//!   that scale from the operands' own precision, so `1.50` equals `1.5`
//!   while `1.49` stays below it.
//! - [`Interval`]: an immutable pair of optional [`Decimal`] bounds with
//!   inclusivity flags. Emptiness is a derived predicate, intersection is a
//!   short-circuiting reduction, and two analyzers derive the range of
//!   fractional-digit and integer-digit counts spanned by the interval's
//!   values.
//!
//! A typical consumer is a validator or formatter that must reason about
//! "what decimal values are possible here" exactly.
//!
//! ## Examples
//!
//! ```rust
//! use decinterval::{Interval, IntervalError};
//!
//! // A price must be positive, at most 100, and quoted in tenths
//! let positive = Interval::from_bounds("0", "", false, false)?;
//! let capped = Interval::from_bounds("", "100", false, true)?;
//! let allowed = Interval::intersect(&[positive, capped])?;
//!
//! assert!(allowed.contains_str("99.9")?);
//! assert!(!allowed.contains_str("0")?);
//!
//! // Any value in (0, 100] needs at most three integer digits
//! let digits = allowed.integer_digit_range()?;
//! assert_eq!(digits.max().unwrap().to_string(), "3");
//! # Ok::<(), IntervalError>(())
//! ```
//!
//! Exact comparison semantics are available directly:
//!
//! ```rust
//! use decinterval::{arith, Decimal};
//! use std::cmp::Ordering;
//!
//! let a: Decimal = "1.50".parse().unwrap();
//! let b: Decimal = "1.5".parse().unwrap();
//! assert_eq!(a.cmp(&b), Ordering::Equal);
//!
//! let rounded = arith::round(&"2.675".parse().unwrap(), 2);
//! assert_eq!(rounded.to_string(), "2.68");
//! ```

pub mod arith;
pub(crate) mod decimal;
pub(crate) mod digits;
pub(crate) mod error;
pub(crate) mod filter;
pub(crate) mod interval;

// Re-export main types and functions
pub use decimal::Decimal;
pub use error::{IntervalError, IntervalResult, ParseDecimalError};
pub use filter::canonicalize;
pub use interval::Interval;
