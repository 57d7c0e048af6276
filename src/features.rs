//! Feature extraction
//!
//! Turns a day's (possibly absent) usage and check-in records into the
//! normalized feature set the theme scorers consume.

use chrono::NaiveDate;

use crate::error::ScoreError;
use crate::types::{DailyCheckInRecord, DailyUsageRecord, ExtractedFeatures};

/// Step count assumed when no usage record exists
const DEFAULT_STEPS: u32 = 5000;

/// Sleep hours assumed when no usage record exists
const DEFAULT_SLEEP_HOURS: f64 = 7.0;

/// Wake hour assumed when no usage record exists
const DEFAULT_WAKE_HOUR: u32 = 7;

/// Below this many steps the day is flagged low-activity
const LOW_ACTIVITY_STEPS: u32 = 3000;

/// Above this many total minutes the day is flagged high-screen-time
const HIGH_SCREEN_TIME_MINUTES: u32 = 240;

/// Waking at or after this hour flags a late wake
const LATE_WAKE_HOUR: u32 = 9;

/// Above this many late-night minutes the day is flagged high-late-night
const HIGH_LATE_NIGHT_MINUTES: u32 = 60;

/// Extractor for daily behavioral features
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Extract features for `date` from the day's records.
    ///
    /// Either record may be absent. Without a usage record the numeric
    /// fields hold defaults and only the self-report fields carry data;
    /// missing usage is deliberately indistinguishable from zero usage in
    /// the numeric fields, and confidence tempers its impact downstream.
    ///
    /// A usage record whose wake time cannot be parsed is a data-integrity
    /// error, not a default.
    pub fn extract(
        date: NaiveDate,
        usage: Option<&DailyUsageRecord>,
        check_in: Option<&DailyCheckInRecord>,
    ) -> Result<ExtractedFeatures, ScoreError> {
        let self_reported_theme = check_in.map(|c| c.primary_theme);
        let mood_score = check_in.map(|c| c.mood_score);

        let usage = match usage {
            Some(usage) => usage,
            None => {
                return Ok(ExtractedFeatures {
                    date,
                    has_usage_data: false,
                    social_media_minutes: 0,
                    shopping_minutes: 0,
                    entertainment_minutes: 0,
                    dating_apps_minutes: 0,
                    productivity_minutes: 0,
                    news_minutes: 0,
                    games_minutes: 0,
                    total_screen_time_minutes: 0,
                    passive_consumption_minutes: 0,
                    phone_pickups: 0,
                    late_night_usage_minutes: 0,
                    steps: DEFAULT_STEPS,
                    sleep_hours: DEFAULT_SLEEP_HOURS,
                    wake_time_hour: DEFAULT_WAKE_HOUR,
                    self_reported_theme,
                    mood_score,
                    is_low_activity: false,
                    is_high_screen_time: false,
                    is_late_wake: false,
                    is_high_late_night: false,
                });
            }
        };

        let total_screen_time = usage.social_media_minutes
            + usage.shopping_minutes
            + usage.entertainment_minutes
            + usage.dating_apps_minutes
            + usage.productivity_minutes
            + usage.news_minutes
            + usage.games_minutes;

        let passive_consumption = usage.entertainment_minutes
            + usage.social_media_minutes
            + usage.news_minutes
            + usage.games_minutes;

        let wake_hour = parse_wake_hour(&usage.wake_time)?;

        Ok(ExtractedFeatures {
            date,
            has_usage_data: true,
            social_media_minutes: usage.social_media_minutes,
            shopping_minutes: usage.shopping_minutes,
            entertainment_minutes: usage.entertainment_minutes,
            dating_apps_minutes: usage.dating_apps_minutes,
            productivity_minutes: usage.productivity_minutes,
            news_minutes: usage.news_minutes,
            games_minutes: usage.games_minutes,
            total_screen_time_minutes: total_screen_time,
            passive_consumption_minutes: passive_consumption,
            phone_pickups: usage.phone_pickups,
            late_night_usage_minutes: usage.late_night_usage_minutes,
            steps: usage.steps,
            sleep_hours: usage.sleep_hours,
            wake_time_hour: wake_hour,
            self_reported_theme,
            mood_score,
            is_low_activity: usage.steps < LOW_ACTIVITY_STEPS,
            is_high_screen_time: total_screen_time > HIGH_SCREEN_TIME_MINUTES,
            is_late_wake: wake_hour >= LATE_WAKE_HOUR,
            is_high_late_night: usage.late_night_usage_minutes > HIGH_LATE_NIGHT_MINUTES,
        })
    }
}

/// Parse the hour component of an "HH:MM" wake time.
fn parse_wake_hour(wake_time: &str) -> Result<u32, ScoreError> {
    let hour_part = wake_time.split(':').next().unwrap_or("");
    let hour: u32 = hour_part
        .parse()
        .map_err(|_| ScoreError::MalformedRecord(format!("unparseable wake time {wake_time:?}")))?;
    if hour > 23 {
        return Err(ScoreError::MalformedRecord(format!(
            "wake hour {hour} out of range in {wake_time:?}"
        )));
    }
    Ok(hour)
}
