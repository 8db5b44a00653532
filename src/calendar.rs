//! Trading calendar derived from the dates present in a price export.
//! Every day between the first and last known trading date is either a
//! trading day, a weekend day, or a holiday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::format::DateFormat;

/// Classification of a single calendar day
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// the exchange was open, i.e. the date appears in the export
    Trading,
    /// closed on a `Sat` or `Sun`
    Weekend,
    /// closed on a weekday
    Holiday,
}

/// Inclusive range of days, `start` to `end`. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days in the range (inclusively)
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    /// Iterate the days of the range in ascending order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let first = if self.is_empty() {
            None
        } else {
            Some(self.start)
        };
        std::iter::successors(first, move |date| {
            date.succ_opt().filter(|next| *next <= end)
        })
    }
}

/// Tally of day kinds over a range
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RangeSummary {
    pub trading: usize,
    pub weekends: usize,
    pub holidays: usize,
    pub first_gap: Option<NaiveDate>,
    pub last_gap: Option<NaiveDate>,
}

impl RangeSummary {
    pub fn total(&self) -> usize {
        self.trading + self.weekends + self.holidays
    }
}

/// Set of known trading dates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradingCalendar {
    trading_days: BTreeSet<NaiveDate>,
}

impl TradingCalendar {
    /// Build the calendar from trading dates in any order; duplicates collapse.
    pub fn from_dates<I>(dates: I) -> TradingCalendar
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        TradingCalendar {
            trading_days: dates.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.trading_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trading_days.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.trading_days.iter().next().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.trading_days.iter().next_back().copied()
    }

    /// Range spanned by the trading dates, `None` for an empty calendar
    pub fn span(&self) -> Option<DateRange> {
        Some(DateRange::new(self.first()?, self.last()?))
    }

    /// Span with optional overrides for either bound. `None` when a bound is
    /// neither overridden nor derivable from the data.
    pub fn span_with(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<DateRange> {
        let start = start.or_else(|| self.first())?;
        let end = end.or_else(|| self.last())?;
        Some(DateRange::new(start, end))
    }

    /// Returns true if the date falls on a weekend
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns true if the date appears in the export
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        self.trading_days.contains(&date)
    }

    /// Returns true if the exchange was closed on a weekday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.classify(date) == DayKind::Holiday
    }

    pub fn classify(&self, date: NaiveDate) -> DayKind {
        if self.is_trading_day(date) {
            DayKind::Trading
        } else if self.is_weekend(date) {
            DayKind::Weekend
        } else {
            DayKind::Holiday
        }
    }

    /// Closest trading day strictly after `date`
    pub fn next_trading_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let next = date.succ_opt()?;
        self.trading_days.range(next..).next().copied()
    }

    /// Closest trading day strictly before `date`
    pub fn prev_trading_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.trading_days.range(..date).next_back().copied()
    }

    /// All non-trading days of `range` in ascending order. Weekend days are
    /// part of the result only if `include_weekends` is set.
    pub fn gaps_in(&self, range: DateRange, include_weekends: bool) -> Vec<NaiveDate> {
        range
            .days()
            .filter(|date| match self.classify(*date) {
                DayKind::Trading => false,
                DayKind::Weekend => include_weekends,
                DayKind::Holiday => true,
            })
            .collect()
    }

    /// Non-trading days between the first and last trading date
    pub fn gap_dates(&self, include_weekends: bool) -> Vec<NaiveDate> {
        match self.span() {
            Some(range) => self.gaps_in(range, include_weekends),
            None => Vec::new(),
        }
    }

    /// Same as [`TradingCalendar::gaps_in`], each date rendered with `format`
    pub fn formatted_gaps_in(
        &self,
        range: DateRange,
        include_weekends: bool,
        format: &DateFormat,
    ) -> Vec<String> {
        let gaps = self.gaps_in(range, include_weekends);
        debug!(
            start = %range.start,
            end = %range.end,
            gaps = gaps.len(),
            include_weekends,
            "computed gap dates"
        );
        gaps.into_iter().map(|date| format.format(date)).collect()
    }

    /// Same as [`TradingCalendar::gap_dates`], each date rendered with `format`
    pub fn formatted_gap_dates(&self, include_weekends: bool, format: &DateFormat) -> Vec<String> {
        match self.span() {
            Some(range) => self.formatted_gaps_in(range, include_weekends, format),
            None => Vec::new(),
        }
    }

    pub fn summarize(&self, range: DateRange) -> RangeSummary {
        let mut summary = RangeSummary::default();
        for date in range.days() {
            match self.classify(date) {
                DayKind::Trading => summary.trading += 1,
                DayKind::Weekend => summary.weekends += 1,
                DayKind::Holiday => summary.holidays += 1,
            }
            if !self.is_trading_day(date) {
                summary.first_gap.get_or_insert(date);
                summary.last_gap = Some(date);
            }
        }
        summary
    }
}
