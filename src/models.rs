use crate::feedback::UsageBand;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's recorded usage. `date` is the key: at most one entry per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub cigarettes: u32,
    pub vapes: u32,
    /// Milliseconds since the epoch; 0 for synthesized placeholders.
    #[serde(rename = "timestamp", alias = "recordedAt")]
    pub recorded_at: i64,
}

impl DailyEntry {
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            date,
            cigarettes: 0,
            vapes: 0,
            recorded_at: 0,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.cigarettes) + u64::from(self.vapes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Cigarettes,
    Vapes,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoal {
    #[serde(rename = "type")]
    pub kind: GoalType,
    pub target_per_day: u32,
    pub start_date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyDay {
    pub date: NaiveDate,
    pub day: String,
    pub cigarettes: u32,
    pub vapes: u32,
    pub total: u64,
    pub is_today: bool,
    pub band: UsageBand,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub total_cigarettes: u64,
    pub total_vapes: u64,
    pub total_items: u64,
    pub days_with_data: usize,
    pub best_day: WeeklyDay,
    pub worst_day: WeeklyDay,
    pub average_per_day: f64,
    pub average_display: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyOverview {
    pub days: Vec<WeeklyDay>,
    pub stats: WeeklyStats,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Feedback {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    #[serde(default)]
    pub cigarettes: Option<serde_json::Value>,
    #[serde(default)]
    pub vapes: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct SavedEntryResponse {
    pub entry: DailyEntry,
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub date: String,
    pub display_date: String,
    pub entry: Option<DailyEntry>,
    pub headline: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    #[serde(rename = "type")]
    pub kind: GoalType,
    pub target_per_day: u32,
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationResponse {
    pub quote: &'static str,
    pub last_shown: Option<NaiveDate>,
    pub shown_today: bool,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_uses_stored_field_names() {
        let raw = r#"{"date":"2025-01-05","cigarettes":3,"vapes":2,"timestamp":1736078400000}"#;
        let entry: DailyEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.total(), 5);
        assert_eq!(serde_json::to_string(&entry).unwrap(), raw);
    }

    #[test]
    fn goal_type_is_lowercase() {
        let raw = r#"{"type":"both","targetPerDay":4,"startDate":"2025-01-05","description":"cut down"}"#;
        let goal: UserGoal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.kind, GoalType::Both);
        assert_eq!(goal.target_per_day, 4);
    }
}
