//! Theme scoring
//!
//! One generic scorer covers all twelve themes: each theme differs only in
//! its configured signal set and weight table, so scoring is data-driven
//! rather than a scorer type per theme.

use std::cmp::Ordering;

use crate::config::{ScoringConfig, Signal};
use crate::normalize::normalize;
use crate::types::{ExtractedFeatures, SignalContribution, Theme, ThemeScore, Trend};

/// Maximum number of top-contributor labels per score
const TOP_CONTRIBUTOR_LIMIT: usize = 3;

/// Contributions below this normalized value never surface as top contributors
const TOP_CONTRIBUTOR_FLOOR: f64 = 0.3;

/// Generic weighted-signal scorer, parameterized by configuration.
pub struct ThemeScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> ThemeScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one theme for a day's features.
    ///
    /// Behavioral contributions are built only when the day has usage data;
    /// a matching self-report appends the synthetic boost contribution. The
    /// score is the weighted average of normalized values scaled to 0-10,
    /// and confidence is the total weight actually contributed, capped at 1.
    pub fn score(&self, theme: Theme, features: &ExtractedFeatures) -> ThemeScore {
        let weights = match self.config.weights.get(&theme) {
            Some(weights) => weights,
            None => return ThemeScore::zero(theme),
        };

        let mut contributions: Vec<SignalContribution> = Vec::new();

        if features.has_usage_data {
            for &(signal, weight) in &weights.signals {
                let raw = raw_value(signal, features);
                let normalized = match self.config.thresholds.get(&signal) {
                    Some(t) => normalize(raw, t.low, t.high, t.invert),
                    None => 0.0,
                };
                contributions.push(SignalContribution {
                    source: signal,
                    label: label_for(signal, features),
                    weight,
                    raw_value: raw,
                    normalized_value: normalized,
                });
            }
        }

        let mut weighted_sum: f64 = contributions
            .iter()
            .map(|c| c.normalized_value * c.weight)
            .sum();
        let mut total_weight: f64 = contributions.iter().map(|c| c.weight).sum();

        if features.self_reported_theme == Some(theme) {
            weighted_sum += self.config.self_report_boost * weights.self_report;
            total_weight += weights.self_report;

            contributions.push(SignalContribution {
                source: Signal::SelfReport,
                label: label_for(Signal::SelfReport, features),
                weight: weights.self_report,
                raw_value: 1.0,
                normalized_value: self.config.self_report_boost,
            });
        }

        let raw_score = if total_weight > 0.0 {
            (weighted_sum / total_weight) * 10.0
        } else {
            0.0
        };
        let confidence = total_weight.min(1.0);

        let top_contributors = top_contributors(&contributions);

        ThemeScore {
            theme,
            score: round_one_decimal(raw_score),
            confidence,
            trend: Trend::Stable,
            top_contributors,
            signal_breakdown: contributions,
        }
    }
}

/// Round a score to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Labels of the strongest contributions: normalized value above the floor,
/// ranked by weight x normalized value, at most three.
fn top_contributors(contributions: &[SignalContribution]) -> Vec<String> {
    let mut candidates: Vec<&SignalContribution> = contributions
        .iter()
        .filter(|c| c.normalized_value > TOP_CONTRIBUTOR_FLOOR)
        .collect();
    candidates.sort_by(|a, b| {
        (b.normalized_value * b.weight)
            .partial_cmp(&(a.normalized_value * a.weight))
            .unwrap_or(Ordering::Equal)
    });
    candidates
        .iter()
        .take(TOP_CONTRIBUTOR_LIMIT)
        .map(|c| c.label.clone())
        .collect()
}

/// Raw feature value for a behavioral signal.
fn raw_value(signal: Signal, features: &ExtractedFeatures) -> f64 {
    match signal {
        Signal::SocialMedia => features.social_media_minutes as f64,
        Signal::Shopping => features.shopping_minutes as f64,
        Signal::Entertainment => features.entertainment_minutes as f64,
        Signal::Dating => features.dating_apps_minutes as f64,
        Signal::ScreenTime => features.total_screen_time_minutes as f64,
        Signal::LateNight => features.late_night_usage_minutes as f64,
        Signal::PhonePickups => features.phone_pickups as f64,
        Signal::Steps => features.steps as f64,
        Signal::WakeTime => features.wake_time_hour as f64,
        Signal::SelfReport => 1.0,
    }
}

/// Human-readable contribution label for a behavioral signal.
fn label_for(signal: Signal, features: &ExtractedFeatures) -> String {
    match signal {
        Signal::SocialMedia => format!("{}min on social media", features.social_media_minutes),
        Signal::Shopping => format!("{}min on shopping apps", features.shopping_minutes),
        Signal::Entertainment => format!("{}min on entertainment", features.entertainment_minutes),
        Signal::Dating => format!("{}min on dating apps", features.dating_apps_minutes),
        Signal::ScreenTime => format!(
            "{}min total screen time",
            features.total_screen_time_minutes
        ),
        Signal::LateNight => format!(
            "{}min late night usage",
            features.late_night_usage_minutes
        ),
        Signal::PhonePickups => format!("{} phone pickups", features.phone_pickups),
        Signal::Steps => format!("{} steps", features.steps),
        Signal::WakeTime => format!("Woke at {}:00", features.wake_time_hour),
        Signal::SelfReport => "Self-reported in check-in".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn make_features() -> ExtractedFeatures {
        ExtractedFeatures {
            date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            has_usage_data: true,
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
            steps: 5000,
            sleep_hours: 7.0,
            wake_time_hour: 7,
            self_reported_theme: None,
            mood_score: None,
            is_low_activity: false,
            is_high_screen_time: false,
            is_late_wake: false,
            is_high_late_night: false,
        }
    }

    #[test]
    fn test_pride_saturated_signals() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.social_media_minutes = 180;
        features.phone_pickups = 100;
        features.late_night_usage_minutes = 90;

        let score = scorer.score(Theme::Pride, &features);

        // All three behavioral signals normalize to 1.0; self-report (0.3)
        // contributes nothing, so 0.7/0.7 * 10 = 10.0 at confidence 0.7.
        assert_eq!(score.score, 10.0);
        assert!((score.confidence - 0.7).abs() < 1e-9);
        assert_eq!(score.signal_breakdown.len(), 3);
    }

    #[test]
    fn test_self_report_boost() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.has_usage_data = false;
        features.self_reported_theme = Some(Theme::Guilt);

        let score = scorer.score(Theme::Guilt, &features);

        // Boost 0.6 at weight 1.0: score 6.0, full confidence.
        assert_eq!(score.score, 6.0);
        assert_eq!(score.confidence, 1.0);
        assert_eq!(score.signal_breakdown.len(), 1);
        assert_eq!(score.top_contributors, vec!["Self-reported in check-in"]);
    }

    #[test]
    fn test_self_report_only_theme_without_report() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let features = make_features();
        let score = scorer.score(Theme::Fear, &features);

        assert_eq!(score.score, 0.0);
        assert_eq!(score.confidence, 0.0);
        assert!(score.signal_breakdown.is_empty());
    }

    #[test]
    fn test_no_usage_data_emits_no_behavioral_contributions() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.has_usage_data = false;

        let score = scorer.score(Theme::Sloth, &features);

        // Default steps (5000) must not produce a phantom contribution.
        assert_eq!(score.score, 0.0);
        assert_eq!(score.confidence, 0.0);
        assert!(score.signal_breakdown.is_empty());
    }

    #[test]
    fn test_sloth_inverted_steps() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.steps = 2000;
        features.total_screen_time_minutes = 240;
        features.wake_time_hour = 10;

        let score = scorer.score(Theme::Sloth, &features);

        // steps=2000 normalizes to 1.0 (inverted), screen time 240 to 0.5,
        // wake hour 10 to 1.0: (0.3 + 0.15 + 0.2)/0.8 * 10 = 8.125 -> 8.1.
        assert_eq!(score.score, 8.1);
        assert!((score.confidence - 0.8).abs() < 1e-9);
        assert_eq!(
            score.top_contributors,
            vec!["2000 steps", "Woke at 10:00", "240min total screen time"]
        );
    }

    #[test]
    fn test_partial_signal_interpolation() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.shopping_minutes = 35; // midway between 10 and 60
        features.total_screen_time_minutes = 35;

        let score = scorer.score(Theme::Greed, &features);

        // shopping 0.5 weight at 0.5 normalized; screen time below its low
        // threshold contributes 0. (0.25)/0.7 * 10 = 3.571... -> 3.6
        assert_eq!(score.score, 3.6);
        assert!((score.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_top_contributors_ranked_by_weighted_value() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.social_media_minutes = 180; // 1.0 x 0.4
        features.phone_pickups = 100; // 1.0 x 0.15
        features.late_night_usage_minutes = 50; // ~0.47 x 0.15

        let score = scorer.score(Theme::Pride, &features);

        assert_eq!(score.top_contributors.len(), 3);
        assert_eq!(score.top_contributors[0], "180min on social media");
        assert_eq!(score.top_contributors[1], "100 phone pickups");
    }

    #[test]
    fn test_weak_contributions_excluded() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.social_media_minutes = 60; // 0.2 normalized, below floor

        let score = scorer.score(Theme::Envy, &features);
        assert!(score.top_contributors.is_empty());
        assert!(score.score > 0.0);
    }

    #[test]
    fn test_mismatched_self_report_does_not_boost() {
        let config = ScoringConfig::default();
        let scorer = ThemeScorer::new(&config);

        let mut features = make_features();
        features.self_reported_theme = Some(Theme::Anger);

        let score = scorer.score(Theme::Pride, &features);
        assert!(score
            .signal_breakdown
            .iter()
            .all(|c| c.source != Signal::SelfReport));
        assert!((score.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(3.571), 3.6);
        assert_eq!(round_one_decimal(3.549), 3.5);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }
}
