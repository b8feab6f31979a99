//! Mocked content records served by the content server functions.

use rand::Rng;

use crate::models::{ChangeType, ChartSeries, GrowthChart, ShowcaseItem, Stat};

pub const CHART_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn stat(id: &str, name: &str, value: f64, change: f64) -> Stat {
    Stat {
        id: id.to_string(),
        name: name.to_string(),
        value,
        change,
        change_type: ChangeType::from_change(change),
    }
}

pub fn stats() -> Vec<Stat> {
    vec![
        stat("1", "Total Users", 28945.0, 12.5),
        stat("2", "Active Sessions", 6782.0, 8.2),
        stat("3", "Conversion Rate", 3.7, 2.1),
        stat("4", "Avg. Session Time", 169.0, -3.4),
    ]
}

/// `count` values drawn uniformly from `min..=max`
pub fn random_series<R: Rng + ?Sized>(rng: &mut R, count: usize, min: u32, max: u32) -> Vec<u32> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    (0..count).map(|_| rng.gen_range(lo..=hi)).collect()
}

pub fn growth_chart<R: Rng + ?Sized>(rng: &mut R) -> GrowthChart {
    let months = CHART_MONTHS.len();
    GrowthChart {
        labels: CHART_MONTHS.iter().map(|m| m.to_string()).collect(),
        series: vec![
            ChartSeries {
                label: "User Growth".into(),
                data: random_series(rng, months, 5_000, 30_000),
            },
            ChartSeries {
                label: "Active Users".into(),
                data: random_series(rng, months, 2_000, 15_000),
            },
        ],
    }
}

fn showcase(id: &str, title: &str, description: &str, image_text: &str, colour: &str, tags: &[&str]) -> ShowcaseItem {
    ShowcaseItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("https://placehold.co/1200x800/{colour}/ffffff?text={image_text}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn showcase_items() -> Vec<ShowcaseItem> {
    vec![
        showcase(
            "1",
            "Global Analytics Dashboard",
            "Real-time data visualization for enterprise metrics tracking across multiple regions.",
            "Dashboard",
            "2563eb",
            &["Analytics", "Enterprise", "Real-time"],
        ),
        showcase(
            "2",
            "Collaboration Workspace",
            "Seamless team communication and project management for distributed teams.",
            "Workspace",
            "4f46e5",
            &["Collaboration", "Teams", "Project Management"],
        ),
        showcase(
            "3",
            "AI-Powered Recommendations",
            "Smart suggestions that learn from user behavior to improve productivity.",
            "AI+Features",
            "7c3aed",
            &["AI", "Machine Learning", "Productivity"],
        ),
        showcase(
            "4",
            "Secure Document Management",
            "End-to-end encrypted storage and sharing for sensitive information.",
            "Security",
            "0ea5e9",
            &["Security", "Compliance", "Document Management"],
        ),
        showcase(
            "5",
            "Integrated Workflow Automation",
            "Automate repetitive tasks and connect your favorite tools effortlessly.",
            "Automation",
            "10b981",
            &["Automation", "Integration", "Workflow"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stats_carry_change_direction() {
        let stats = stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].change_type, ChangeType::Increase);
        assert_eq!(stats[3].change_type, ChangeType::Decrease);
    }

    #[test]
    fn random_series_respects_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = random_series(&mut rng, 200, 5_000, 30_000);
        assert_eq!(data.len(), 200);
        assert!(data.iter().all(|v| (5_000..=30_000).contains(v)));

        let swapped = random_series(&mut rng, 10, 9, 3);
        assert!(swapped.iter().all(|v| (3..=9).contains(v)));
    }

    #[test]
    fn chart_has_one_point_per_month() {
        let mut rng = StdRng::seed_from_u64(1);
        let chart = growth_chart(&mut rng);
        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.series.len(), 2);
        assert!(chart.series.iter().all(|s| s.data.len() == chart.labels.len()));
    }

    #[test]
    fn showcase_items_are_tagged() {
        let items = showcase_items();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|i| !i.tags.is_empty()));
        assert!(items[2].image.ends_with("text=AI+Features"));
    }
}
