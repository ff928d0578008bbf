//! Stays: half-open date intervals and their price.

use jiff::civil::DateTime;
use rust_decimal::Decimal;

use crate::dates::whole_days_between;

/// A `[check_in, check_out)` interval with `check_in` strictly before `check_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    check_in: DateTime,
    check_out: DateTime,
    nights: i64,
}

impl Stay {
    /// Returns `None` unless `check_in < check_out`.
    #[must_use]
    pub fn new(check_in: DateTime, check_out: DateTime) -> Option<Self> {
        if check_in >= check_out {
            return None;
        }

        let nights = whole_days_between(check_in, check_out)?;

        Some(Self {
            check_in,
            check_out,
            nights,
        })
    }

    /// Start of the stay.
    #[must_use]
    pub fn check_in(&self) -> DateTime {
        self.check_in
    }

    /// End of the stay, exclusive.
    #[must_use]
    pub fn check_out(&self) -> DateTime {
        self.check_out
    }

    /// Whole nights in the stay.
    #[must_use]
    pub fn nights(&self) -> i64 {
        self.nights
    }

    /// Whether the two stays share any instant.
    ///
    /// Back-to-back stays, where one checks out as the other checks in, do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Stay) -> bool {
        self.overlaps_range(other.check_in, other.check_out)
    }

    /// Like [`Stay::overlaps`], against a raw interval.
    #[must_use]
    pub fn overlaps_range(&self, check_in: DateTime, check_out: DateTime) -> bool {
        !(self.check_out <= check_in || self.check_in >= check_out)
    }

    /// Total for the stay at the given nightly price, to two decimal places.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn price_at(&self, price_per_night: Decimal) -> Option<Decimal> {
        let mut total = Decimal::from(self.nights).checked_mul(price_per_night)?;

        total.rescale(2);

        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    fn day(d: i8) -> DateTime {
        date(2025, 6, d).at(0, 0, 0, 0)
    }

    fn stay(check_in: i8, check_out: i8) -> Result<Stay, &'static str> {
        Stay::new(day(check_in), day(check_out)).ok_or("invalid stay")
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert!(Stay::new(day(4), day(4)).is_none(), "same day");
        assert!(Stay::new(day(5), day(4)).is_none(), "inverted");
    }

    #[test]
    fn counts_nights() -> TestResult {
        assert_eq!(stay(1, 4)?.nights(), 3);
        assert_eq!(stay(1, 2)?.nights(), 1);

        Ok(())
    }

    #[test]
    fn partial_days_are_truncated() -> TestResult {
        let stay = Stay::new(day(1), date(2025, 6, 3).at(11, 0, 0, 0)).ok_or("invalid")?;

        assert_eq!(stay.nights(), 2);

        Ok(())
    }

    #[test]
    fn overlap_matches_half_open_rule_for_every_pair() -> TestResult {
        // Exhaustive over small day ranges: [a,b) and [c,d) overlap iff NOT (b <= c OR a >= d).
        for a in 1..=6_i8 {
            for b in (a + 1)..=7 {
                for c in 1..=6_i8 {
                    for d in (c + 1)..=7 {
                        let expected = !(b <= c || a >= d);
                        let first = stay(a, b)?;
                        let second = stay(c, d)?;

                        assert_eq!(first.overlaps(&second), expected, "[{a},{b}) vs [{c},{d})");
                        assert_eq!(second.overlaps(&first), expected, "symmetry");
                    }
                }
            }
        }

        Ok(())
    }

    #[test]
    fn adjacent_stays_do_not_overlap() -> TestResult {
        assert!(!stay(1, 4)?.overlaps(&stay(4, 6)?), "checkout day is free");
        assert!(stay(1, 4)?.overlaps(&stay(3, 5)?), "day 3 is shared");

        Ok(())
    }

    #[test]
    fn price_is_nights_times_rate() -> TestResult {
        let total = stay(1, 4)?
            .price_at(Decimal::new(2500, 0))
            .ok_or("overflow")?;

        assert_eq!(total, Decimal::new(750_000, 2));
        assert_eq!(total.to_string(), "7500.00");

        let fractional = stay(1, 4)?
            .price_at(Decimal::new(333_333, 4))
            .ok_or("overflow")?;

        assert_eq!(fractional, Decimal::new(10_000, 2));

        Ok(())
    }

    #[test]
    fn price_overflow_is_reported() -> TestResult {
        assert!(stay(1, 4)?.price_at(Decimal::MAX).is_none(), "overflow");

        Ok(())
    }
}
