// Host-side tests for stat formatting and the content models feeding it.

use innovate::format::{bar_heights, change_label, format_number, stat_value_label};
use innovate::models::{validate_email, ChangeType, ChartSeries, GrowthChart, NewsletterError, Stat};

#[test]
fn compact_magnitudes() {
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1_500.0), "1.5K");
    assert_eq!(format_number(2_500_000.0), "2.5M");
    assert_eq!(format_number(1_000_000.0), "1.0M");
    assert_eq!(format_number(999_999.0), "1000.0K");
}

#[test]
fn compact_magnitudes_round_half_up() {
    assert_eq!(format_number(1_250.0), "1.3K");
    assert_eq!(format_number(2_250.0), "2.3K");
    assert_eq!(format_number(2_250_000.0), "2.3M");
    assert_eq!(format_number(1_249.0), "1.2K");
}

#[test]
fn dashboard_card_labels() {
    let revenue = Stat {
        id: "2".into(),
        name: "Revenue".into(),
        value: 1_245_600.0,
        change: 8.3,
        change_type: ChangeType::Increase,
    };
    assert_eq!(stat_value_label(&revenue), "1.2M");
    assert_eq!(change_label(&revenue), "↑ 8.3%");
    assert_eq!(revenue.change_type.css_class(), "change-up");

    let conversion = Stat {
        id: "3".into(),
        name: "Conversion Rate".into(),
        value: 3.7,
        change: -1.2,
        change_type: ChangeType::from_change(-1.2),
    };
    assert_eq!(stat_value_label(&conversion), "3.7%");
    assert_eq!(change_label(&conversion), "↓ 1.2%");
}

#[test]
fn chart_bars_share_one_scale() {
    let chart = GrowthChart {
        labels: vec!["Jan".into(), "Feb".into()],
        series: vec![
            ChartSeries {
                label: "New Users".into(),
                data: vec![100, 400],
            },
            ChartSeries {
                label: "Active Users".into(),
                data: vec![200, 800],
            },
        ],
    };
    let max = chart.max_value();
    assert_eq!(max, 800);
    assert_eq!(bar_heights(&chart.series[0].data, max), vec![12.5, 50.0]);
    assert_eq!(bar_heights(&chart.series[1].data, max), vec![25.0, 100.0]);
}

#[test]
fn newsletter_addresses() {
    assert_eq!(validate_email("  Ada@Example.com ").unwrap(), "ada@example.com");
    assert_eq!(validate_email("   "), Err(NewsletterError::EmptyEmail));
    assert!(matches!(validate_email("not-an-email"), Err(NewsletterError::InvalidEmail(_))));
}
