//! Core types for the theme scoring pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: raw daily records, extracted features, per-theme scores, and the
//! aggregated weekly report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Signal;

/// The twelve character themes being scored. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Pride,
    Greed,
    Lust,
    Anger,
    Gluttony,
    Envy,
    Sloth,
    Fear,
    SelfPity,
    Guilt,
    Shame,
    Dishonesty,
}

impl Theme {
    /// All themes in canonical scoring order.
    pub const ALL: [Theme; 12] = [
        Theme::Pride,
        Theme::Greed,
        Theme::Lust,
        Theme::Anger,
        Theme::Gluttony,
        Theme::Envy,
        Theme::Sloth,
        Theme::Fear,
        Theme::SelfPity,
        Theme::Guilt,
        Theme::Shame,
        Theme::Dishonesty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Pride => "pride",
            Theme::Greed => "greed",
            Theme::Lust => "lust",
            Theme::Anger => "anger",
            Theme::Gluttony => "gluttony",
            Theme::Envy => "envy",
            Theme::Sloth => "sloth",
            Theme::Fear => "fear",
            Theme::SelfPity => "self_pity",
            Theme::Guilt => "guilt",
            Theme::Shame => "shame",
            Theme::Dishonesty => "dishonesty",
        }
    }
}

/// One day of self-reported app usage and health metrics for a user.
///
/// Unique per user and calendar date. May not exist for a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyUsageRecord {
    /// Storage identifier, if the record has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Calendar date this record covers
    pub date: NaiveDate,

    // Time in minutes per app category
    pub social_media_minutes: u32,
    pub shopping_minutes: u32,
    pub entertainment_minutes: u32,
    pub dating_apps_minutes: u32,
    pub productivity_minutes: u32,
    pub news_minutes: u32,
    pub games_minutes: u32,

    /// Number of times the phone was picked up
    pub phone_pickups: u32,
    /// Minutes of usage after 23:00
    pub late_night_usage_minutes: u32,

    /// Step count for the day
    pub steps: u32,
    /// Hours slept
    pub sleep_hours: f64,
    /// Wake time as "HH:MM"
    pub wake_time: String,

    /// Where the record came from (e.g. "manual", "imported")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One day's mood check-in for a user.
///
/// Unique per user and calendar date. May not exist for a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCheckInRecord {
    /// Storage identifier, if the record has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Calendar date this check-in covers
    pub date: NaiveDate,
    /// Mood score, 1-10
    pub mood_score: u8,
    /// The theme the user identified with most that day
    pub primary_theme: Theme,
    /// Optional free-text journal entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_entry: Option<String>,
    /// Where the record came from (e.g. "manual", "imported")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Normalized feature set derived from a day's records.
///
/// Ephemeral: recomputed on every scoring call, never persisted. When no
/// usage record exists the numeric fields hold defaults and
/// `has_usage_data` is false, so scorers emit no behavioral contributions
/// for the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    /// Date the features describe
    pub date: NaiveDate,
    /// Whether a usage record backed these features
    pub has_usage_data: bool,

    // Category time (minutes)
    pub social_media_minutes: u32,
    pub shopping_minutes: u32,
    pub entertainment_minutes: u32,
    pub dating_apps_minutes: u32,
    pub productivity_minutes: u32,
    pub news_minutes: u32,
    pub games_minutes: u32,

    // Derived aggregates
    /// Sum of all seven category minutes
    pub total_screen_time_minutes: u32,
    /// Entertainment + social media + news + games
    pub passive_consumption_minutes: u32,

    pub phone_pickups: u32,
    pub late_night_usage_minutes: u32,
    pub steps: u32,
    pub sleep_hours: f64,
    /// Hour component of the wake time, 0-23
    pub wake_time_hour: u32,

    // Self-report (from the check-in, independent of usage presence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_reported_theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_score: Option<u8>,

    // Boolean flags from fixed thresholds
    pub is_low_activity: bool,
    pub is_high_screen_time: bool,
    pub is_late_wake: bool,
    pub is_high_late_night: bool,
}

/// One weighted input line to a theme score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalContribution {
    /// Signal this contribution came from
    pub source: Signal,
    /// Human-readable label, e.g. "45min on social media"
    pub label: String,
    /// Weight from the theme's static weight table
    pub weight: f64,
    /// Raw metric value before normalization
    pub raw_value: f64,
    /// Normalized value in [0, 1]
    pub normalized_value: f64,
}

/// Week-over-week direction of a theme score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Score for one theme on one day, or aggregated across a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeScore {
    pub theme: Theme,
    /// 0-10, rounded to one decimal
    pub score: f64,
    /// Fraction of declared scoring weight backed by data, 0-1
    pub confidence: f64,
    /// Week-over-week direction; daily scores are always `Stable`
    pub trend: Trend,
    /// Labels of the strongest contributing signals, at most three
    pub top_contributors: Vec<String>,
    /// Full contribution list; empty on weekly aggregates
    pub signal_breakdown: Vec<SignalContribution>,
}

impl ThemeScore {
    /// An empty score: no data, no confidence.
    pub fn zero(theme: Theme) -> Self {
        Self {
            theme,
            score: 0.0,
            confidence: 0.0,
            trend: Trend::Stable,
            top_contributors: Vec::new(),
            signal_breakdown: Vec::new(),
        }
    }
}

/// Kind of weekly highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    Highest,
    MostImproved,
    NeedsAttention,
}

/// A notable theme called out in the weekly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeHighlight {
    pub theme: Theme,
    pub kind: HighlightKind,
    pub message: String,
}

/// A reflective journaling prompt generated for a prominent theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectivePrompt {
    pub theme: Theme,
    pub prompt: String,
}

/// Aggregated, trend-annotated view of a Monday-start scoring week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    /// One score per theme, in canonical theme order
    pub scores: Vec<ThemeScore>,
    /// Up to three highlights
    pub highlights: Vec<ThemeHighlight>,
    /// One prompt per prominent theme, up to three
    pub reflective_prompts: Vec<ReflectivePrompt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_serialization() {
        let json = serde_json::to_string(&Theme::SelfPity).unwrap();
        assert_eq!(json, "\"self_pity\"");

        let parsed: Theme = serde_json::from_str("\"dishonesty\"").unwrap();
        assert_eq!(parsed, Theme::Dishonesty);
    }

    #[test]
    fn test_theme_all_is_distinct() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in Theme::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_usage_record_deserialization() {
        let json = r#"{
            "date": "2024-03-11",
            "social_media_minutes": 95,
            "shopping_minutes": 10,
            "entertainment_minutes": 60,
            "dating_apps_minutes": 0,
            "productivity_minutes": 120,
            "news_minutes": 25,
            "games_minutes": 30,
            "phone_pickups": 64,
            "late_night_usage_minutes": 20,
            "steps": 7421,
            "sleep_hours": 6.5,
            "wake_time": "07:30",
            "source": "manual"
        }"#;

        let record: DailyUsageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(record.social_media_minutes, 95);
        assert_eq!(record.wake_time, "07:30");
        assert_eq!(record.source.as_deref(), Some("manual"));
        assert!(record.id.is_none());
    }

    #[test]
    fn test_check_in_record_deserialization() {
        let json = r#"{
            "date": "2024-03-11",
            "mood_score": 4,
            "primary_theme": "guilt",
            "journal_entry": "rough day"
        }"#;

        let record: DailyCheckInRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.primary_theme, Theme::Guilt);
        assert_eq!(record.mood_score, 4);
        assert_eq!(record.journal_entry.as_deref(), Some("rough day"));
    }

    #[test]
    fn test_trend_serialization() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&HighlightKind::MostImproved).unwrap(),
            "\"most_improved\""
        );
    }
}
