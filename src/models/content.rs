use serde::{Deserialize, Serialize};

/// Direction of a stat's month-over-month movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Increase,
    Decrease,
    Neutral,
}

impl ChangeType {
    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeType::Increase => "change-up",
            ChangeType::Decrease => "change-down",
            ChangeType::Neutral => "change-flat",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            ChangeType::Increase => "↑",
            ChangeType::Decrease => "↓",
            ChangeType::Neutral => "•",
        }
    }

    /// Classify a signed percentage change
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            ChangeType::Increase
        } else if change < 0.0 {
            ChangeType::Decrease
        } else {
            ChangeType::Neutral
        }
    }
}

/// One headline metric on the stats dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub change: f64,
    pub change_type: ChangeType,
}

/// A named series of monthly values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<u32>,
}

/// Six-month growth chart shown under the stat cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GrowthChart {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl GrowthChart {
    /// Largest value across every series, used to scale bars together
    pub fn max_value(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// A customer project on the showcase page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

/// Errors that can occur when subscribing to the newsletter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NewsletterError {
    #[error("Please enter an email address")]
    EmptyEmail,
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),
}

/// Light syntactic check; deliverability is not our concern here
pub fn validate_email(email: &str) -> Result<String, NewsletterError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(NewsletterError::EmptyEmail);
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(email.to_lowercase())
    } else {
        Err(NewsletterError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_type_from_sign() {
        assert_eq!(ChangeType::from_change(12.5), ChangeType::Increase);
        assert_eq!(ChangeType::from_change(-3.4), ChangeType::Decrease);
        assert_eq!(ChangeType::from_change(0.0), ChangeType::Neutral);
    }

    #[test]
    fn change_type_serializes_lowercase() {
        let json = serde_json::to_string(&ChangeType::Decrease).unwrap();
        assert_eq!(json, "\"decrease\"");
    }

    #[test]
    fn chart_max_spans_series() {
        let chart = GrowthChart {
            labels: vec!["Jan".into(), "Feb".into()],
            series: vec![
                ChartSeries { label: "a".into(), data: vec![3, 9] },
                ChartSeries { label: "b".into(), data: vec![12, 1] },
            ],
        };
        assert_eq!(chart.max_value(), 12);
        assert_eq!(GrowthChart::default().max_value(), 0);
    }

    #[test]
    fn email_validation() {
        assert_eq!(validate_email("  Ana@Example.com ").unwrap(), "ana@example.com");
        assert_eq!(validate_email(""), Err(NewsletterError::EmptyEmail));
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a@@b.com").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a b@c.com").is_err());
    }
}
