//! Scoring configuration
//!
//! Immutable weight tables and normalization thresholds. Loaded once and
//! passed into the engine explicitly, so tests can run against alternate
//! configurations. `ScoringConfig::default()` reproduces the production
//! tables; each theme's weights (including the self-report entry) sum to 1.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Theme;

/// A raw or derived metric feeding into theme scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    SocialMedia,
    Shopping,
    Entertainment,
    Dating,
    ScreenTime,
    LateNight,
    PhonePickups,
    Steps,
    WakeTime,
    SelfReport,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::SocialMedia => "social_media",
            Signal::Shopping => "shopping",
            Signal::Entertainment => "entertainment",
            Signal::Dating => "dating",
            Signal::ScreenTime => "screen_time",
            Signal::LateNight => "late_night",
            Signal::PhonePickups => "phone_pickups",
            Signal::Steps => "steps",
            Signal::WakeTime => "wake_time",
            Signal::SelfReport => "self_report",
        }
    }
}

/// Normalization threshold pair for one signal.
///
/// `invert` flips the mapping for metrics where fewer is worse (steps);
/// inverted thresholds are declared with `low > high`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Threshold {
    pub low: f64,
    pub high: f64,
    #[serde(default)]
    pub invert: bool,
}

impl Threshold {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            invert: false,
        }
    }

    pub fn inverted(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            invert: true,
        }
    }
}

/// Weight table for one theme.
///
/// Behavioral signals are listed in contribution order; the self-report
/// weight applies only when the day's check-in names this theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeWeights {
    pub signals: Vec<(Signal, f64)>,
    pub self_report: f64,
}

impl ThemeWeights {
    fn new(signals: Vec<(Signal, f64)>, self_report: f64) -> Self {
        Self {
            signals,
            self_report,
        }
    }

    /// Self-report only: no behavioral signals.
    fn self_report_only() -> Self {
        Self::new(Vec::new(), 1.0)
    }

    /// Total declared weight, behavioral plus self-report.
    pub fn total(&self) -> f64 {
        self.signals.iter().map(|(_, w)| w).sum::<f64>() + self.self_report
    }
}

/// Immutable configuration for the scoring engine.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Normalization thresholds per behavioral signal
    pub thresholds: HashMap<Signal, Threshold>,
    /// Weight table per theme
    pub weights: HashMap<Theme, ThemeWeights>,
    /// Synthetic normalized value applied on a matching self-report
    pub self_report_boost: f64,
}

/// Normalized self-report contribution when a theme is named in a check-in.
pub const SELF_REPORT_BOOST: f64 = 0.6;

/// Minimum confidence callers should require before displaying a score.
///
/// Exposed for presentation layers; the engine itself never filters on it.
pub const MIN_CONFIDENCE: f64 = 0.1;

impl Default for ScoringConfig {
    fn default() -> Self {
        let thresholds = HashMap::from([
            (Signal::SocialMedia, Threshold::new(30.0, 180.0)),
            (Signal::Shopping, Threshold::new(10.0, 60.0)),
            (Signal::Entertainment, Threshold::new(60.0, 240.0)),
            (Signal::Dating, Threshold::new(5.0, 60.0)),
            (Signal::ScreenTime, Threshold::new(120.0, 360.0)),
            (Signal::LateNight, Threshold::new(15.0, 90.0)),
            (Signal::PhonePickups, Threshold::new(30.0, 100.0)),
            (Signal::Steps, Threshold::inverted(8000.0, 2000.0)),
            (Signal::WakeTime, Threshold::new(7.0, 10.0)),
        ]);

        let weights = HashMap::from([
            (
                Theme::Pride,
                ThemeWeights::new(
                    vec![
                        (Signal::SocialMedia, 0.4),
                        (Signal::PhonePickups, 0.15),
                        (Signal::LateNight, 0.15),
                    ],
                    0.3,
                ),
            ),
            (
                Theme::Greed,
                ThemeWeights::new(
                    vec![(Signal::Shopping, 0.5), (Signal::ScreenTime, 0.2)],
                    0.3,
                ),
            ),
            (
                Theme::Lust,
                ThemeWeights::new(vec![(Signal::Dating, 0.4), (Signal::LateNight, 0.3)], 0.3),
            ),
            (
                Theme::Anger,
                ThemeWeights::new(
                    vec![(Signal::LateNight, 0.1), (Signal::PhonePickups, 0.1)],
                    0.8,
                ),
            ),
            (
                Theme::Gluttony,
                ThemeWeights::new(
                    vec![(Signal::Entertainment, 0.4), (Signal::LateNight, 0.3)],
                    0.3,
                ),
            ),
            (
                Theme::Envy,
                ThemeWeights::new(
                    vec![(Signal::SocialMedia, 0.5), (Signal::PhonePickups, 0.2)],
                    0.3,
                ),
            ),
            (
                Theme::Sloth,
                ThemeWeights::new(
                    vec![
                        (Signal::Steps, 0.3),
                        (Signal::ScreenTime, 0.3),
                        (Signal::WakeTime, 0.2),
                    ],
                    0.2,
                ),
            ),
            (Theme::Fear, ThemeWeights::self_report_only()),
            (Theme::SelfPity, ThemeWeights::self_report_only()),
            (Theme::Guilt, ThemeWeights::self_report_only()),
            (Theme::Shame, ThemeWeights::self_report_only()),
            (Theme::Dishonesty, ThemeWeights::self_report_only()),
        ]);

        Self {
            thresholds,
            weights,
            self_report_boost: SELF_REPORT_BOOST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_weights() {
        let config = ScoringConfig::default();
        for theme in Theme::ALL {
            assert!(config.weights.contains_key(&theme), "missing {theme:?}");
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let config = ScoringConfig::default();
        for (theme, weights) in &config.weights {
            assert!(
                (weights.total() - 1.0).abs() < 1e-9,
                "{theme:?} weights sum to {}",
                weights.total()
            );
        }
    }

    #[test]
    fn test_every_behavioral_signal_has_threshold() {
        let config = ScoringConfig::default();
        for weights in config.weights.values() {
            for (signal, _) in &weights.signals {
                assert!(
                    config.thresholds.contains_key(signal),
                    "missing threshold for {signal:?}"
                );
            }
        }
    }

    #[test]
    fn test_steps_threshold_is_inverted() {
        let config = ScoringConfig::default();
        let steps = config.thresholds[&Signal::Steps];
        assert!(steps.invert);
        assert!(steps.low > steps.high);
    }

    #[test]
    fn test_self_report_only_themes() {
        let config = ScoringConfig::default();
        for theme in [
            Theme::Fear,
            Theme::SelfPity,
            Theme::Guilt,
            Theme::Shame,
            Theme::Dishonesty,
        ] {
            let weights = &config.weights[&theme];
            assert!(weights.signals.is_empty());
            assert_eq!(weights.self_report, 1.0);
        }
    }

    #[test]
    fn test_signal_serialization() {
        assert_eq!(
            serde_json::to_string(&Signal::SocialMedia).unwrap(),
            "\"social_media\""
        );
        assert_eq!(
            serde_json::to_string(&Signal::SelfReport).unwrap(),
            "\"self_report\""
        );
    }
}
