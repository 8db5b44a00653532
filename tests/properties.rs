use chrono::{Datelike, Days, NaiveDate, Weekday};
use marketdates::calendar::TradingCalendar;
use marketdates::{DateFormat, DayKind};
use proptest::prelude::*;

/// day offsets into a window starting 2023-12-01, unordered, repeats allowed
fn offsets() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..400, 0..60)
}

fn to_dates(offsets: &[u64]) -> Vec<NaiveDate> {
    let origin = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
    offsets
        .iter()
        .map(|n| origin.checked_add_days(Days::new(*n)).unwrap())
        .collect()
}

fn weekend(date: &NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

proptest! {
    #[test]
    fn prop_every_day_has_one_kind(offsets in offsets()) {
        let cal = TradingCalendar::from_dates(to_dates(&offsets));
        if let Some(range) = cal.span() {
            let summary = cal.summarize(range);
            prop_assert_eq!(summary.total(), range.len());
            prop_assert_eq!(summary.trading, cal.len());
            prop_assert_eq!(
                summary.weekends + summary.holidays,
                cal.gap_dates(true).len()
            );
        } else {
            prop_assert!(offsets.is_empty());
        }
    }

    #[test]
    fn prop_gaps_sorted_and_disjoint(offsets in offsets()) {
        let cal = TradingCalendar::from_dates(to_dates(&offsets));
        let gaps = cal.gap_dates(true);
        prop_assert!(gaps.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(gaps.iter().all(|d| !cal.is_trading_day(*d)));
        if let Some(range) = cal.span() {
            let trading_in_range = range.days().filter(|d| cal.is_trading_day(*d)).count();
            prop_assert_eq!(trading_in_range + gaps.len(), range.len());
        }
    }

    #[test]
    fn prop_holidays_are_weekday_gaps(offsets in offsets()) {
        let cal = TradingCalendar::from_dates(to_dates(&offsets));
        let holidays = cal.gap_dates(false);
        let weekday_gaps: Vec<NaiveDate> = cal
            .gap_dates(true)
            .into_iter()
            .filter(|d| !weekend(d))
            .collect();
        prop_assert_eq!(&holidays, &weekday_gaps);
        prop_assert!(holidays.iter().all(|d| cal.classify(*d) == DayKind::Holiday));
    }

    #[test]
    fn prop_input_order_does_not_matter(
        (offsets, shuffled) in offsets().prop_flat_map(|o| (Just(o.clone()), Just(o).prop_shuffle()))
    ) {
        let cal = TradingCalendar::from_dates(to_dates(&offsets));
        let again = TradingCalendar::from_dates(to_dates(&shuffled));
        let format = DateFormat::parse("%a DD/MM/YYYY").unwrap();
        prop_assert_eq!(cal.gap_dates(true), again.gap_dates(true));
        prop_assert_eq!(
            cal.formatted_gap_dates(false, &format),
            again.formatted_gap_dates(false, &format)
        );
    }
}
