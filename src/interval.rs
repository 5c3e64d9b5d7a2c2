use crate::arith;
use crate::decimal::Decimal;
use crate::error::{IntervalError, IntervalResult};
use std::cmp::Ordering;

/// A contiguous, possibly unbounded, possibly open/closed set of [`Decimal`]
/// values.
///
/// An absent bound means that side is unbounded; its inclusivity flag is
/// meaningless and normalized to `false` at construction so that structural
/// equality agrees with set equality. Construction performs no ordering
/// check: an interval whose minimum exceeds its maximum is simply the empty
/// set, reported by [`is_empty_set`](Self::is_empty_set).
///
/// All bound comparisons are performed at the finer of the two operands'
/// natural precisions (see [`crate::arith::cmp_at_scale`]), never at a fixed
/// global scale.
///
/// # Examples
///
/// ```rust
/// use decinterval::Interval;
///
/// let iv = Interval::from_bounds("1.5", "2.5", true, true)?;
/// assert!(iv.contains_str("1.5")?);
/// assert!(iv.contains_str("2.5")?);
/// assert!(!iv.contains_str("1.49")?);
/// assert!(!iv.contains_str("2.51")?);
/// # Ok::<(), decinterval::IntervalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    min: Option<Decimal>,
    max: Option<Decimal>,
    include_min: bool,
    include_max: bool,
}

impl Interval {
    /// Create an interval from optional bounds and their inclusivity flags.
    ///
    /// The flag of an absent bound is stored as `false` regardless of what is
    /// passed.
    #[must_use]
    pub fn new(
        min: Option<Decimal>,
        max: Option<Decimal>,
        include_min: bool,
        include_max: bool,
    ) -> Self {
        let include_min = include_min && min.is_some();
        let include_max = include_max && max.is_some();
        Self {
            min,
            max,
            include_min,
            include_max,
        }
    }

    /// The interval `(-∞, +∞)`: both bounds absent, containing every value
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(None, None, false, false)
    }

    /// Create an interval from bound strings, `""` meaning unbounded.
    ///
    /// Non-empty bounds must match `-?\d+(\.\d+)?` and are canonicalized on
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidMin`] or [`IntervalError::InvalidMax`]
    /// when a non-empty bound fails the syntax check.
    pub fn from_bounds(
        min: &str,
        max: &str,
        include_min: bool,
        include_max: bool,
    ) -> IntervalResult<Self> {
        let min = match min {
            "" => None,
            text => Some(text.parse().map_err(IntervalError::InvalidMin)?),
        };
        let max = match max {
            "" => None,
            text => Some(text.parse().map_err(IntervalError::InvalidMax)?),
        };
        Ok(Self::new(min, max, include_min, include_max))
    }

    /// The lower bound, if any
    #[must_use]
    pub fn min(&self) -> Option<&Decimal> {
        self.min.as_ref()
    }

    /// The upper bound, if any
    #[must_use]
    pub fn max(&self) -> Option<&Decimal> {
        self.max.as_ref()
    }

    /// Whether the lower bound itself belongs to the interval
    #[must_use]
    pub fn include_min(&self) -> bool {
        self.include_min
    }

    /// Whether the upper bound itself belongs to the interval
    #[must_use]
    pub fn include_max(&self) -> bool {
        self.include_max
    }

    /// True if no value lies in the interval.
    ///
    /// An interval with an absent bound is never empty. With both bounds
    /// present it is empty iff `min > max`, or `min == max` with either end
    /// exclusive, compared at the finer of the bounds' natural precisions.
    #[must_use]
    pub fn is_empty_set(&self) -> bool {
        let (Some(min), Some(max)) = (&self.min, &self.max) else {
            return false;
        };
        let scale = min.fractional_digits().max(max.fractional_digits());
        match arith::cmp_at_scale(min, max, scale) {
            Ordering::Greater => true,
            Ordering::Equal => !(self.include_min && self.include_max),
            Ordering::Less => false,
        }
    }

    /// Test whether `value` lies in the interval.
    ///
    /// Each present bound is compared at the finer of its own and the value's
    /// natural precisions; a value equal to an exclusive bound is outside.
    /// Absent sides never reject.
    #[must_use]
    pub fn contains(&self, value: &Decimal) -> bool {
        if let Some(min) = &self.min {
            let scale = min.fractional_digits().max(value.fractional_digits());
            match arith::cmp_at_scale(value, min, scale) {
                Ordering::Less => return false,
                Ordering::Equal if !self.include_min => return false,
                _ => {}
            }
        }
        if let Some(max) = &self.max {
            let scale = max.fractional_digits().max(value.fractional_digits());
            match arith::cmp_at_scale(max, value, scale) {
                Ordering::Less => return false,
                Ordering::Equal if !self.include_max => return false,
                _ => {}
            }
        }
        true
    }

    /// Test membership of a numeric string.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NotNumeric`] when the text fails the
    /// `-?\d+(\.\d+)?` syntax check.
    pub fn contains_str(&self, value: &str) -> IntervalResult<bool> {
        let value: Decimal = value.parse().map_err(IntervalError::NotNumeric)?;
        Ok(self.contains(&value))
    }

    /// Intersect all given intervals.
    ///
    /// Reduces left to right starting from [`unbounded`](Self::unbounded),
    /// checking for emptiness before each step: an empty accumulator (or an
    /// empty next interval) short-circuits the rest of the reduction, since
    /// emptiness is absorbing.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NotEnoughIntervals`] when fewer than two
    /// intervals are given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decinterval::Interval;
    ///
    /// let a = Interval::from_bounds("1", "10", true, true)?;
    /// let b = Interval::from_bounds("5.5", "", false, false)?;
    /// let joined = Interval::intersect(&[a, b])?;
    /// assert!(!joined.contains_str("5.5")?);
    /// assert!(joined.contains_str("5.6")?);
    /// assert!(joined.contains_str("10")?);
    /// # Ok::<(), decinterval::IntervalError>(())
    /// ```
    pub fn intersect(intervals: &[Interval]) -> IntervalResult<Interval> {
        if intervals.len() < 2 {
            return Err(IntervalError::NotEnoughIntervals(intervals.len()));
        }
        let mut acc = Self::unbounded();
        for next in intervals {
            if acc.is_empty_set() {
                break;
            }
            acc = if next.is_empty_set() {
                next.clone()
            } else {
                Self::combine(&acc, next)
            };
        }
        Ok(acc)
    }

    /// Intersect with one other interval
    #[must_use]
    pub fn intersect_with(&self, other: &Interval) -> Interval {
        if self.is_empty_set() {
            return self.clone();
        }
        if other.is_empty_set() {
            return other.clone();
        }
        Self::combine(self, other)
    }

    /// Pairwise intersection of two non-empty intervals.
    ///
    /// The larger minimum and the smaller maximum win, each carrying its own
    /// inclusivity; an absent side yields to the other; on a tie the bound is
    /// inclusive only if it was inclusive in both inputs.
    fn combine(a: &Interval, b: &Interval) -> Interval {
        let (min, include_min) = match (&a.min, &b.min) {
            (None, None) => (None, false),
            (None, Some(m)) => (Some(m.clone()), b.include_min),
            (Some(m), None) => (Some(m.clone()), a.include_min),
            (Some(am), Some(bm)) => {
                let scale = am.fractional_digits().max(bm.fractional_digits());
                match arith::cmp_at_scale(am, bm, scale) {
                    Ordering::Greater => (Some(am.clone()), a.include_min),
                    Ordering::Less => (Some(bm.clone()), b.include_min),
                    Ordering::Equal => (Some(am.clone()), a.include_min && b.include_min),
                }
            }
        };
        let (max, include_max) = match (&a.max, &b.max) {
            (None, None) => (None, false),
            (None, Some(m)) => (Some(m.clone()), b.include_max),
            (Some(m), None) => (Some(m.clone()), a.include_max),
            (Some(am), Some(bm)) => {
                let scale = am.fractional_digits().max(bm.fractional_digits());
                match arith::cmp_at_scale(am, bm, scale) {
                    Ordering::Greater => (Some(bm.clone()), b.include_max),
                    Ordering::Less => (Some(am.clone()), a.include_max),
                    Ordering::Equal => (Some(am.clone()), a.include_max && b.include_max),
                }
            }
        };
        Interval::new(min, max, include_min, include_max)
    }
}

impl Default for Interval {
    /// The unbounded interval, the identity of intersection
    fn default() -> Self {
        Self::unbounded()
    }
}
