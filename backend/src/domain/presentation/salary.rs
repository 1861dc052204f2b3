//! Salary display strings.

/// Format a whole-dollar amount with a `$` prefix and comma grouping, no
/// decimal places.
#[must_use]
pub fn format_money(amount: i32) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if amount < 0 {
        grouped.push('-');
    }
    grouped.push('$');
    let leading = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == leading {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Combine the salary bounds and type label into one display string.
///
/// A zero bound counts as unspecified, matching how the job form treats an
/// untouched number input. One bound, or equal bounds, shows a single
/// amount; two distinct bounds show a range; neither shows "Not specified".
#[must_use]
pub fn format_salary(
    salary_min: Option<i32>,
    salary_max: Option<i32>,
    salary_type: &str,
) -> String {
    let min = salary_min.filter(|v| *v != 0);
    let max = salary_max.filter(|v| *v != 0);
    match (min, max) {
        (None, None) => "Not specified".to_owned(),
        (Some(single), None) | (None, Some(single)) => {
            format!("{} {salary_type}", format_money(single))
        }
        (Some(low), Some(high)) if low == high => {
            format!("{} {salary_type}", format_money(low))
        }
        (Some(low), Some(high)) => {
            format!("{} - {} {salary_type}", format_money(low), format_money(high))
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{format_money, format_salary};

    #[rstest]
    #[case(0, "$0")]
    #[case(15, "$15")]
    #[case(999, "$999")]
    #[case(1_000, "$1,000")]
    #[case(50_000, "$50,000")]
    #[case(1_234_567, "$1,234,567")]
    #[case(-1_500, "-$1,500")]
    fn money_groups_thousands(#[case] amount: i32, #[case] expected: &str) {
        assert_eq!(format_money(amount), expected);
    }

    #[rstest]
    #[case(Some(15), Some(20), "Per Hour", "$15 - $20 Per Hour")]
    #[case(Some(50_000), Some(50_000), "Yearly", "$50,000 Yearly")]
    #[case(Some(45_000), None, "Yearly", "$45,000 Yearly")]
    #[case(None, Some(60_000), "Yearly", "$60,000 Yearly")]
    #[case(None, None, "Yearly", "Not specified")]
    #[case(Some(0), Some(0), "Per Hour", "Not specified")]
    #[case(Some(0), Some(20), "Per Hour", "$20 Per Hour")]
    fn salary_strings_cover_every_shape(
        #[case] min: Option<i32>,
        #[case] max: Option<i32>,
        #[case] salary_type: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(format_salary(min, max, salary_type), expected);
    }
}
