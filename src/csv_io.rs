//! Reading trading dates from a price export and writing gap dates back out.
//!
//! The export is the Yahoo Finance history download, e.g.
//!
//! ```text
//! Date,Open,High,Low,Close,Adj Close,Volume
//! 2024-01-02,4745.200195,4754.330078,4722.669922,4742.830078,4742.830078,3743050000
//! ```
//!
//! Only the `Date` column is used.

use chrono::NaiveDate;
use serde::Deserialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::calendar::TradingCalendar;
use crate::error::{MarketDatesError, Result};

pub const DATE_COLUMN: &str = "Date";
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Date")]
    date: String,
}

/// Load the trading calendar from the export at `path`.
pub fn read_trading_calendar(path: &Path) -> Result<TradingCalendar> {
    if !path.exists() {
        return Err(MarketDatesError::InputNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|source| MarketDatesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dates = read_dates(file, path)?;
    let calendar = TradingCalendar::from_dates(dates.iter().copied());
    info!(
        path = %path.display(),
        rows = dates.len(),
        trading_days = calendar.len(),
        "loaded trading dates"
    );
    Ok(calendar)
}

/// Parse the `Date` column of every row; `origin` only labels errors.
pub fn read_dates<R: Read>(reader: R, origin: &Path) -> Result<Vec<NaiveDate>> {
    let csv_err = |source: csv::Error| MarketDatesError::Csv {
        path: origin.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = reader.headers().map_err(csv_err)?.clone();
    if !headers.iter().any(|h| h == DATE_COLUMN) {
        return Err(MarketDatesError::MissingColumn {
            path: origin.to_path_buf(),
            column: DATE_COLUMN.to_string(),
        });
    }

    let mut dates = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_err)? {
        let row: PriceRow = record.deserialize(Some(&headers)).map_err(csv_err)?;
        let date = NaiveDate::parse_from_str(&row.date, INPUT_DATE_FORMAT).map_err(|source| {
            MarketDatesError::InvalidDate {
                line: record.position().map_or(0, |pos| pos.line()),
                value: row.date,
                source,
            }
        })?;
        dates.push(date);
    }
    debug!(rows = dates.len(), "parsed date column");
    Ok(dates)
}

/// Write the `Date` header and one date per line to `path`.
pub fn write_dates(path: &Path, dates: &[String]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| MarketDatesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_dates_to(file, dates, path)?;
    info!(path = %path.display(), rows = dates.len(), "wrote gap dates");
    Ok(())
}

pub fn write_dates_to<W: Write>(writer: W, dates: &[String], origin: &Path) -> Result<()> {
    let csv_err = |source: csv::Error| MarketDatesError::Csv {
        path: origin.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([DATE_COLUMN]).map_err(csv_err)?;
    for date in dates {
        writer.write_record([date]).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| MarketDatesError::Io {
        path: origin.to_path_buf(),
        source,
    })
}
