//! Relative "posted N ago" labels.

use chrono::{DateTime, Datelike, NaiveTime, Utc};

/// Average month length used to count whole months over long spans.
const AVERAGE_MONTH_DAYS: f64 = 30.44;

/// Human label for how long ago a posting went up.
///
/// The posting timestamp is truncated to midnight before the day delta is
/// taken, so a listing created late in the evening still reads "Today" all
/// day. Branches, in priority order: whole months beyond 90 days, today,
/// yesterday, exactly one week, roughly one month (a tolerance window around
/// the month boundary, leap-adjusted), whole months beyond eight weeks, exact
/// week multiples up to 90 days, rounded weeks beyond 33 days, plain days
/// otherwise. Timestamps in the future report "Today".
#[must_use]
pub fn time_since_posted(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let midnight = posted.date_naive().and_time(NaiveTime::MIN).and_utc();
    let days = (now - midnight).num_days();

    if days > 90 {
        return format!("{} months ago", months(days));
    }
    if days <= 0 {
        return "Today".to_owned();
    }
    if days == 1 {
        return "Yesterday".to_owned();
    }
    if days == 7 {
        return "1 week ago".to_owned();
    }

    let average_days_in_month = if is_leap_year(now.year()) { 30.5 } else { 30.417 };
    #[expect(clippy::cast_precision_loss, reason = "day counts are tiny")]
    let month_remainder = (days as f64 % average_days_in_month).floor();
    let near_month_boundary = month_remainder < 3.0 || month_remainder > 28.0;

    if near_month_boundary && days > 28 && days < 34 {
        return "1 month ago".to_owned();
    }
    if days > 56 && near_month_boundary {
        return format!("{} months ago", months(days));
    }
    if days % 7 == 0 {
        return format!("{} weeks ago", days / 7);
    }
    if days > 33 {
        #[expect(clippy::cast_precision_loss, reason = "day counts are tiny")]
        let weeks = (days as f64 / 7.0).round();
        return format!("{weeks} weeks ago");
    }
    format!("{days} days ago")
}

fn months(days: i64) -> i64 {
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "day counts are tiny"
    )]
    let rounded = (days as f64 / AVERAGE_MONTH_DAYS).round() as i64;
    rounded
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rstest::rstest;

    use super::time_since_posted;

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single().expect("valid date")
    }

    #[rstest]
    #[case(0, "Today")]
    #[case(1, "Yesterday")]
    #[case(2, "2 days ago")]
    #[case(6, "6 days ago")]
    #[case(7, "1 week ago")]
    #[case(14, "2 weeks ago")]
    #[case(21, "3 weeks ago")]
    #[case(95, "3 months ago")]
    #[case(365, "12 months ago")]
    fn day_deltas_map_to_labels(#[case] days_ago: i64, #[case] expected: &str) {
        let now = noon(2026, 8, 31);
        let posted = now - Duration::days(days_ago);
        assert_eq!(time_since_posted(posted, now), expected);
    }

    #[rstest]
    #[case(29)]
    #[case(30)]
    #[case(31)]
    fn a_little_over_four_weeks_reads_one_month(#[case] days_ago: i64) {
        let now = noon(2026, 8, 31);
        let posted = now - Duration::days(days_ago);
        assert_eq!(time_since_posted(posted, now), "1 month ago");
    }

    #[rstest]
    fn same_day_evening_posting_is_today() {
        let now = noon(2026, 8, 31);
        // Posted later the same day; truncation to midnight keeps the delta
        // at zero days.
        let posted = Utc
            .with_ymd_and_hms(2026, 8, 31, 23, 30, 0)
            .single()
            .expect("valid date");
        assert_eq!(time_since_posted(posted, now), "Today");
    }

    #[rstest]
    fn future_timestamps_clamp_to_today() {
        let now = noon(2026, 8, 31);
        let posted = now + Duration::days(3);
        assert_eq!(time_since_posted(posted, now), "Today");
    }

    #[rstest]
    fn mid_range_weeks_round_to_the_nearest_week() {
        let now = noon(2026, 8, 31);
        // 38 days: not a month-boundary value, not an exact week multiple.
        let posted = now - Duration::days(38);
        assert_eq!(time_since_posted(posted, now), "5 weeks ago");
    }
}
