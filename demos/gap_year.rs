use chrono::{Datelike, NaiveDate, Weekday};
use marketdates::calendar::{DateRange, TradingCalendar};
/// example: pretend every weekday of a year traded except the given holidays,
/// then recover those holidays from the gaps
use std::env::args;

fn main() {
    let args: Vec<String> = args().collect();
    let year: i32 = match args.get(1).map(|y| y.parse()) {
        Some(Ok(year)) => year,
        _ => {
            eprintln!("Usage: {} year [YYYY-MM-DD...]", args[0]);
            std::process::exit(2);
        }
    };
    let closed = match parse_closed(&args[2..]) {
        Ok(closed) => closed,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        eprintln!("year {} out of range", year);
        std::process::exit(2);
    };
    let traded = DateRange::new(first, last)
        .days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .filter(|d| !closed.contains(d));
    let cal = TradingCalendar::from_dates(traded);
    println!("holidays: {:?}", cal.gap_dates(false));
    if let Some(range) = cal.span() {
        println!("summary: {:?}", cal.summarize(range));
    }
}

/// Parse the closed days given on the command line; the first bad one is an error
fn parse_closed(args: &[String]) -> Result<Vec<NaiveDate>, String> {
    args.iter()
        .map(|arg| {
            NaiveDate::parse_from_str(arg, "%Y-%m-%d")
                .map_err(|err| format!("{:?} is not a YYYY-MM-DD date: {}", arg, err))
        })
        .collect()
}
