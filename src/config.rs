//! Command line configuration.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::csv_io::INPUT_DATE_FORMAT;
use crate::format::{DateFormat, DEFAULT_TEMPLATE};

const ABOUT: &str = "Writes all NYSE non-trading days covered by an S&P 500 price export.";

const LONG_ABOUT: &str = "\
Writes all NYSE non-trading days covered by an S&P 500 price export.

Download the index history as CSV from
https://finance.yahoo.com/quote/%5ESPX/history?p=%5ESPX (Historical Data,
select the date range, Apply, Download) and save it as ^SPX.csv. Every day
between the first and last row of the file that has no row of its own is a
non-trading day.

By default only non-trading weekdays are written; use --data-format W or
--include-weekends to also write Saturdays and Sundays.";

/// Which non-trading days end up in the output
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// non-trading weekdays only
    #[default]
    #[value(name = "N")]
    NonTrading,
    /// non-trading weekdays and weekends
    #[value(name = "W")]
    WithWeekends,
}

/// One end of the date range, either taken from the data or given explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeBound {
    #[default]
    All,
    Date(NaiveDate),
}

impl RangeBound {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            RangeBound::All => None,
            RangeBound::Date(date) => Some(*date),
        }
    }
}

fn parse_format(value: &str) -> Result<DateFormat, String> {
    DateFormat::parse(value).map_err(|err| err.to_string())
}

fn parse_bound(value: &str) -> Result<RangeBound, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(RangeBound::All);
    }
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT)
        .map(RangeBound::Date)
        .map_err(|_| format!("{value:?} is not in the 'YYYY-MM-DD' format"))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "marketdates", version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    /// Input CSV file
    #[arg(long, alias = "in_filename", default_value = "^SPX.csv")]
    pub in_filename: PathBuf,

    /// Output CSV filename
    #[arg(long, alias = "out_filename", default_value = "dates.csv")]
    pub out_filename: PathBuf,

    /// Output date format, built from YYYY, MM, DD and strftime directives like %b
    #[arg(
        long,
        alias = "out_date_format",
        default_value = DEFAULT_TEMPLATE,
        value_parser = parse_format
    )]
    pub out_date_format: DateFormat,

    /// N for just non-trading days, W for non-trading days and weekends
    #[arg(long, alias = "data_format", value_enum, ignore_case = true, default_value = "N")]
    pub data_format: DataFormat,

    /// Same as --data-format W
    #[arg(short = 'w', long)]
    pub include_weekends: bool,

    /// Start date, YYYY-MM-DD, or All to start at the first row
    #[arg(long, alias = "start_date", default_value = "All", value_parser = parse_bound)]
    pub start_date: RangeBound,

    /// End date, YYYY-MM-DD, or All to end at the last row
    #[arg(long, alias = "end_date", default_value = "All", value_parser = parse_bound)]
    pub end_date: RangeBound,
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub date_format: DateFormat,
    pub include_weekends: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input: args.in_filename,
            output: args.out_filename,
            date_format: args.out_date_format,
            include_weekends: args.include_weekends
                || args.data_format == DataFormat::WithWeekends,
            start: args.start_date.date(),
            end: args.end_date.date(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("^SPX.csv"),
            output: PathBuf::from("dates.csv"),
            date_format: DateFormat::default(),
            include_weekends: false,
            start: None,
            end: None,
        }
    }
}
