use crate::models::{DailyEntry, Feedback};
use serde::Serialize;

/// Coarse usage level of a single day's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageBand {
    SmokeFree,
    Low,
    Moderate,
    High,
}

impl UsageBand {
    pub fn from_total(total: u64) -> Self {
        match total {
            0 => UsageBand::SmokeFree,
            1..=3 => UsageBand::Low,
            4..=7 => UsageBand::Moderate,
            _ => UsageBand::High,
        }
    }
}

pub fn daily_feedback(total: u64) -> Feedback {
    match UsageBand::from_total(total) {
        UsageBand::SmokeFree => Feedback {
            title: "Amazing! You had a smoke-free day!",
            description: "You're incredible! Keep it up!",
        },
        UsageBand::Low => Feedback {
            title: "Great job keeping it low today!",
            description: "You're doing so well! I'm proud of you!",
        },
        UsageBand::Moderate => Feedback {
            title: "Every tracked day is progress!",
            description: "You're on the right track! Keep going!",
        },
        UsageBand::High => Feedback {
            title: "Thank you for being honest. Tomorrow is a new day!",
            description: "I believe in you! We can do this together!",
        },
    }
}

pub fn daily_summary(entry: Option<&DailyEntry>) -> &'static str {
    let Some(entry) = entry else {
        return "Let's track your progress for today!";
    };
    match UsageBand::from_total(entry.total()) {
        UsageBand::SmokeFree => "You had a smoke-free day! You're amazing!",
        UsageBand::Low => "Great job keeping it low today!",
        UsageBand::Moderate => "Every tracked day is progress!",
        UsageBand::High => "Thank you for being honest. Tomorrow is a new day!",
    }
}

pub fn weekly_message(total_items: u64) -> &'static str {
    match total_items {
        0 => "Incredible! You've had a smoke-free week!",
        1..=10 => "You're doing amazing! Keep up the great work!",
        11..=25 => "Great progress! You're on the right track!",
        _ => "Every day tracked is progress. You're building healthy habits!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(UsageBand::from_total(0), UsageBand::SmokeFree);
        assert_eq!(UsageBand::from_total(3), UsageBand::Low);
        assert_eq!(UsageBand::from_total(4), UsageBand::Moderate);
        assert_eq!(UsageBand::from_total(7), UsageBand::Moderate);
        assert_eq!(UsageBand::from_total(8), UsageBand::High);
    }

    #[test]
    fn summary_without_entry_prompts_to_track() {
        assert_eq!(daily_summary(None), "Let's track your progress for today!");
    }

    #[test]
    fn weekly_thresholds() {
        assert!(weekly_message(0).contains("smoke-free week"));
        assert!(weekly_message(10).contains("doing amazing"));
        assert!(weekly_message(25).contains("right track"));
        assert!(weekly_message(26).contains("healthy habits"));
    }
}
