//! Derive NYSE non-trading days from the gaps in a historical index price
//! export.
//!
//! Every calendar day between the first and last row of the export that has
//! no row of its own is a non-trading day: a weekend day when it falls on a
//! Saturday or Sunday, otherwise a holiday.

pub mod calendar;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod format;

use tracing::info;

use crate::calendar::{DateRange, RangeSummary, TradingCalendar};
use crate::config::Config;
use crate::error::Result;

pub use crate::calendar::DayKind;
pub use crate::error::MarketDatesError;
pub use crate::format::DateFormat;

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// formatted gap dates, ascending
    pub dates: Vec<String>,
    pub range: Option<DateRange>,
    pub summary: RangeSummary,
}

impl Outcome {
    /// Line printed once the output has been written
    pub fn message(&self, config: &Config) -> String {
        let output = config.output.display();
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => format!(
                "Non-trading days {} weekends written to {} from {} to {} complete.",
                if config.include_weekends { "with" } else { "without" },
                output,
                first,
                last
            ),
            _ => format!("No non-trading days found; wrote header only to {}.", output),
        }
    }
}

/// Gap dates of `calendar` over the configured range, formatted for output
pub fn compute(calendar: &TradingCalendar, config: &Config) -> Outcome {
    let range = calendar
        .span_with(config.start, config.end)
        .filter(|range| !range.is_empty());
    match range {
        Some(range) => Outcome {
            dates: calendar.formatted_gaps_in(range, config.include_weekends, &config.date_format),
            range: Some(range),
            summary: calendar.summarize(range),
        },
        None => Outcome {
            dates: Vec::new(),
            range: None,
            summary: RangeSummary::default(),
        },
    }
}

/// Read the export, compute the gap dates and write them out
pub fn run(config: &Config) -> Result<Outcome> {
    let calendar = csv_io::read_trading_calendar(&config.input)?;
    let outcome = compute(&calendar, config);
    if let Some(range) = outcome.range {
        info!(
            start = %range.start,
            end = %range.end,
            trading = outcome.summary.trading,
            weekends = outcome.summary.weekends,
            holidays = outcome.summary.holidays,
            "classified date range"
        );
    }
    csv_io::write_dates(&config.output, &outcome.dates)?;
    Ok(outcome)
}
