//! Digit-range analysis: how many fractional or integer digits a value drawn
//! from an interval could require.
//!
//! Both analyzers return their answer as another [`Interval`] whose bounds
//! are digit counts, reusing the interval type generically.

use crate::arith;
use crate::decimal::Decimal;
use crate::error::{IntervalError, IntervalResult};
use crate::interval::Interval;

impl Interval {
    /// The range of fractional-digit counts that the shortest exact
    /// representation of some value in this interval can require.
    ///
    /// If either bound is absent, the interval contains `0`, or it reaches
    /// the first integer above its lower edge, values of every fractional
    /// width fit and the result is `[0, +∞)`. Otherwise the interval lies
    /// strictly inside a single unit span and the lower bound's digits are
    /// scanned depth by depth: the first depth at which either the lower
    /// bound itself (when inclusive) or the smallest representable step
    /// above it falls inside the interval decides the minimum count. A
    /// single-point interval pins the maximum as well; in every other
    /// non-trivial case the maximum is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptySet`] when the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decinterval::Interval;
    ///
    /// let iv = Interval::from_bounds("1.2", "1.8", true, true)?;
    /// let counts = iv.fractional_digit_range()?;
    /// assert_eq!(counts.min().unwrap().to_string(), "1");
    /// assert!(counts.max().is_none());
    /// # Ok::<(), decinterval::IntervalError>(())
    /// ```
    pub fn fractional_digit_range(&self) -> IntervalResult<Interval> {
        if self.is_empty_set() {
            return Err(IntervalError::EmptySet);
        }
        let every_count = Interval::new(Some(Decimal::zero()), None, true, false);
        let (Some(min), Some(max)) = (self.min(), self.max()) else {
            return Ok(every_count);
        };
        if self.contains(&Decimal::zero()) {
            return Ok(every_count);
        }
        // The first integer strictly above the lower edge. Reaching it means
        // the interval holds a zero-fractional-digit value and, having a
        // whole-unit neighborhood of it, values of every deeper width too.
        let next_integer = arith::add_truncated(&arith::floor(min), &Decimal::one(), 0);
        if self.contains(&next_integer) {
            return Ok(every_count);
        }

        let min_digits = min.fractional_digits();
        let scan_len = min_digits.max(max.fractional_digits()).max(1);
        for place in 1..=scan_len {
            if self.include_min() && min_digits <= place {
                let lowest = Decimal::from(min_digits);
                let highest = (self.include_max() && max == min).then(|| lowest.clone());
                return Ok(Interval::new(Some(lowest), highest, true, true));
            }
            // smallest value representable with `place` digits that exceeds
            // the lower bound's first `place` digits
            let probe = arith::add_truncated(&min.truncate(place), &Decimal::unit_at(place), place);
            if self.contains(&probe) {
                return Ok(Interval::new(Some(Decimal::from(place)), None, true, false));
            }
        }
        Ok(Interval::new(
            Some(Decimal::from(scan_len + 1)),
            None,
            true,
            false,
        ))
    }

    /// The range of integer-digit counts (ignoring sign) needed to represent
    /// the integer part of values in this interval, both bounds inclusive.
    ///
    /// An exclusive endpoint never occurs as a value, so where an endpoint's
    /// integer part is outside the interval the extremal attainable integer
    /// is found by stepping one unit toward the interior.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptySet`] when the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decinterval::Interval;
    ///
    /// let iv = Interval::from_bounds("-2", "3", true, true)?;
    /// let counts = iv.integer_digit_range()?;
    /// assert_eq!(counts.min().unwrap().to_string(), "1");
    /// assert_eq!(counts.max().unwrap().to_string(), "1");
    /// # Ok::<(), decinterval::IntervalError>(())
    /// ```
    pub fn integer_digit_range(&self) -> IntervalResult<Interval> {
        if self.is_empty_set() {
            return Err(IntervalError::EmptySet);
        }
        let (Some(min), Some(max)) = (self.min(), self.max()) else {
            return Ok(Interval::new(Some(Decimal::one()), None, true, false));
        };
        let min_int = min.integer_part();
        let max_int = max.integer_part();

        let (lowest, highest) = if self.contains(&Decimal::zero()) {
            let from_max = self.attainable_digits(&max_int, Direction::Down);
            let from_min = self.attainable_digits(&min_int, Direction::Up);
            (1, from_max.max(from_min))
        } else if !max_int.is_negative() && !max_int.is_zero() {
            // entirely on the positive side: the short integers sit at min
            (
                self.attainable_digits(&min_int, Direction::Up),
                self.attainable_digits(&max_int, Direction::Down),
            )
        } else {
            // entirely on the negative side: the extremes swap roles
            (
                self.attainable_digits(&max_int, Direction::Down),
                self.attainable_digits(&min_int, Direction::Up),
            )
        };
        Ok(Interval::new(
            Some(Decimal::from(lowest)),
            Some(Decimal::from(highest)),
            true,
            true,
        ))
    }

    /// Digit length of `endpoint` if the interval attains it, else of the
    /// integer one unit toward the interior
    fn attainable_digits(&self, endpoint: &Decimal, interior: Direction) -> usize {
        if self.contains(endpoint) {
            return endpoint.integer_digits();
        }
        let one = Decimal::one();
        let stepped = match interior {
            Direction::Up => arith::add_truncated(endpoint, &one, 0),
            Direction::Down => arith::sub_truncated(endpoint, &one, 0),
        };
        stepped.integer_digits()
    }
}

/// Which way to step an unattained endpoint's integer part
enum Direction {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: &str, max: &str, include_min: bool, include_max: bool) -> Interval {
        Interval::from_bounds(min, max, include_min, include_max).unwrap()
    }

    fn bounds(iv: &Interval) -> (String, Option<String>) {
        (
            iv.min().unwrap().to_string(),
            iv.max().map(ToString::to_string),
        )
    }

    #[test]
    fn test_fractional_range_rejects_empty() {
        let empty = range("2", "1", true, true);
        assert_eq!(empty.fractional_digit_range(), Err(IntervalError::EmptySet));
        assert_eq!(empty.integer_digit_range(), Err(IntervalError::EmptySet));
    }

    #[test]
    fn test_fractional_range_unbounded_side_allows_everything() {
        for iv in [
            Interval::unbounded(),
            range("", "1.5", false, true),
            range("1.5", "", true, false),
        ] {
            let counts = iv.fractional_digit_range().unwrap();
            assert_eq!(bounds(&counts), ("0".to_string(), None));
            assert!(counts.include_min());
        }
    }

    #[test]
    fn test_fractional_range_containing_zero_allows_everything() {
        let counts = range("-0.5", "0.5", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("0".to_string(), None));
    }

    #[test]
    fn test_fractional_range_crossing_an_integer_allows_everything() {
        // spans 2, a zero-fractional-digit value
        let counts = range("1.9", "2.05", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("0".to_string(), None));
        // same on the negative side, spanning -2
        let counts = range("-2.05", "-1.9", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("0".to_string(), None));
    }

    #[test]
    fn test_fractional_range_within_a_unit_span() {
        // 1.3 is representable with one digit and lies inside
        let counts = range("1.2", "1.8", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), None));

        // lower bound needs two digits but 1.3 still fits
        let counts = range("1.25", "1.8", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), None));
    }

    #[test]
    fn test_fractional_range_inclusive_integer_bound_needs_no_digits() {
        // 5 itself lies in the interval, so zero fractional digits suffice
        let counts = range("5", "5.5", true, false)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("0".to_string(), None));
    }

    #[test]
    fn test_fractional_range_single_point() {
        let counts = range("0.1", "0.1", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("1".to_string())));
        assert!(counts.include_min());
        assert!(counts.include_max());

        let counts = range("3.25", "3.25", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("2".to_string(), Some("2".to_string())));
    }

    #[test]
    fn test_fractional_range_needs_deeper_digits() {
        // no one-digit value lies in [1.21, 1.24]
        let counts = range("1.21", "1.24", true, true)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("2".to_string(), None));

        // exclusive lower bound forces the probe path at every depth
        let counts = range("1.21", "1.3", false, false)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("2".to_string(), None));
    }

    #[test]
    fn test_fractional_range_exhausted_scan_falls_back() {
        // neither 1.6 (excluded) nor any shallower step lies inside, and the
        // open lower bound rules itself out: only deeper values like 1.55 fit
        let counts = range("1.5", "1.6", false, false)
            .fractional_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("2".to_string(), None));
    }

    #[test]
    fn test_integer_range_unbounded_side() {
        for iv in [
            Interval::unbounded(),
            range("", "99", false, true),
            range("7", "", true, false),
        ] {
            let counts = iv.integer_digit_range().unwrap();
            assert_eq!(bounds(&counts), ("1".to_string(), None));
        }
    }

    #[test]
    fn test_integer_range_straddling_zero() {
        let counts = range("-2", "3", true, true).integer_digit_range().unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("1".to_string())));

        // the wider side wins the maximum
        let counts = range("-250", "99", true, true)
            .integer_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("3".to_string())));
    }

    #[test]
    fn test_integer_range_positive_side() {
        let counts = range("7", "9000", true, true).integer_digit_range().unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("4".to_string())));

        // fractional bounds below 1 still have a one-digit integer part
        let counts = range("0.2", "0.5", true, true)
            .integer_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("1".to_string())));
    }

    #[test]
    fn test_integer_range_negative_side() {
        let counts = range("-25.5", "-3", true, true)
            .integer_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("2".to_string())));
    }

    #[test]
    fn test_integer_range_exclusive_endpoints_step_inward() {
        // 10 never occurs, so the largest attainable integer part is 9
        let counts = range("1", "10", true, false).integer_digit_range().unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("1".to_string())));

        // with 10 included the maximum grows to two digits
        let counts = range("1", "10", true, true).integer_digit_range().unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("2".to_string())));

        // an unattained endpoint's integer part steps one unit inward:
        // 9 is outside (9, 20], so the minimum is measured at 10
        let counts = range("9", "20", false, true).integer_digit_range().unwrap();
        assert_eq!(bounds(&counts), ("2".to_string(), Some("2".to_string())));

        // open negative bounds: every attainable integer part is one digit
        let counts = range("-10", "-1", false, false)
            .integer_digit_range()
            .unwrap();
        assert_eq!(bounds(&counts), ("1".to_string(), Some("1".to_string())));
    }

    #[test]
    fn test_digit_counts_compose_with_membership() {
        let counts = range("1.2", "1.8", true, true)
            .fractional_digit_range()
            .unwrap();
        assert!(counts.contains_str("1").unwrap());
        assert!(counts.contains_str("250").unwrap());
        assert!(!counts.contains_str("0").unwrap());
    }
}
