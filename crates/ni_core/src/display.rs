use chrono::{DateTime, Utc};
use serde::Serialize;

/// Relative age label used on cards and the article page.
pub fn time_ago(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - published).num_milliseconds().div_euclid(86_400_000);
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d => format!("{} months ago", d / 30),
    }
}

/// `15420` becomes `15.4k`; anything under a thousand is printed as is.
pub fn format_count(n: u64) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementTier {
    High,
    Medium,
    Low,
}

impl EngagementTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            EngagementTier::High
        } else if score >= 7.0 {
            EngagementTier::Medium
        } else {
            EngagementTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_ago() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::hours(3), now), "Today");
        assert_eq!(time_ago(now - Duration::hours(30), now), "Yesterday");
        assert_eq!(time_ago(now - Duration::days(5), now), "5 days ago");
        assert_eq!(time_ago(now - Duration::days(15), now), "2 weeks ago");
        assert_eq!(time_ago(now - Duration::days(65), now), "2 months ago");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(15420), "15.4k");
        assert_eq!(format_count(1000), "1.0k");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn test_engagement_tier() {
        assert_eq!(EngagementTier::from_score(9.1), EngagementTier::High);
        assert_eq!(EngagementTier::from_score(8.5), EngagementTier::Medium);
        assert_eq!(EngagementTier::from_score(3.0), EngagementTier::Low);
    }
}
