//! Number formatting for the stats dashboard.

use crate::models::Stat;

/// Compact magnitude: `1.5K`, `2.5M`, or the plain number below a thousand.
///
/// The scaled value is rounded half-up to one decimal, so `1250` is `1.3K`.
/// Negative input is not meaningful here and is printed as-is.
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000.0 {
        format!("{:.1}M", (num / 100_000.0).round() / 10.0)
    } else if num >= 1_000.0 {
        format!("{:.1}K", (num / 100.0).round() / 10.0)
    } else {
        format!("{}", num)
    }
}

/// Percentage change rounded to one decimal; zero when there is no baseline
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    ((current - previous) / previous * 1000.0).round() / 10.0
}

/// Headline value of a stat card. Rates are already percentages.
pub fn stat_value_label(stat: &Stat) -> String {
    if stat.name.contains("Rate") {
        format!("{}%", stat.value)
    } else {
        format_number(stat.value)
    }
}

pub fn change_label(stat: &Stat) -> String {
    format!("{} {}%", stat.change_type.arrow(), stat.change.abs())
}

/// Bar heights as a percentage of the tallest value
pub fn bar_heights(values: &[u32], max: u32) -> Vec<f64> {
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|&v| (v as f64 / max as f64 * 100.0).min(100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChangeType;

    fn stat(name: &str, value: f64, change: f64) -> Stat {
        Stat {
            id: "x".into(),
            name: name.into(),
            value,
            change,
            change_type: ChangeType::from_change(change),
        }
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(3.7), "3.7");
        assert_eq!(format_number(1_000.0), "1.0K");
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(28_945.0), "28.9K");
        assert_eq!(format_number(1_000_000.0), "1.0M");
        assert_eq!(format_number(2_500_000.0), "2.5M");
    }

    #[test]
    fn compact_numbers_round_ties_up() {
        assert_eq!(format_number(1_250.0), "1.3K");
        assert_eq!(format_number(2_250.0), "2.3K");
        assert_eq!(format_number(2_250_000.0), "2.3M");
        assert_eq!(format_number(1_240.0), "1.2K");
    }

    #[test]
    fn percent_change_rounds() {
        assert_eq!(percent_change(110.0, 100.0), 10.0);
        assert_eq!(percent_change(50.0, 150.0), -66.7);
        assert_eq!(percent_change(5.0, 0.0), 0.0);
    }

    #[test]
    fn stat_labels() {
        assert_eq!(stat_value_label(&stat("Conversion Rate", 3.7, 2.1)), "3.7%");
        assert_eq!(stat_value_label(&stat("Total Users", 28_945.0, 12.5)), "28.9K");
        assert_eq!(stat_value_label(&stat("Avg. Session Time", 169.0, -3.4)), "169");
        assert_eq!(change_label(&stat("Avg. Session Time", 169.0, -3.4)), "↓ 3.4%");
        assert_eq!(change_label(&stat("Total Users", 1.0, 12.5)), "↑ 12.5%");
        assert_eq!(change_label(&stat("Flat", 1.0, 0.0)), "• 0%");
    }

    #[test]
    fn bars_scale_to_max() {
        assert_eq!(bar_heights(&[5, 10], 10), vec![50.0, 100.0]);
        assert_eq!(bar_heights(&[5, 10], 0), vec![0.0, 0.0]);
    }
}
