//! Scoring engine orchestration
//!
//! Ties the pipeline together: fetch a day's records, extract features, run
//! every theme scorer, then aggregate across a Monday-start week with trend
//! detection, highlights, and reflective prompts.
//!
//! The engine owns no durable state; every result is recomputed from the
//! record store at call time.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::error::ScoreError;
use crate::features::FeatureExtractor;
use crate::prompts::{PromptSelector, RandomPromptSelector};
use crate::scorer::{round_one_decimal, ThemeScorer};
use crate::store::RecordStore;
use crate::themes;
use crate::types::{
    HighlightKind, ReflectivePrompt, Theme, ThemeHighlight, ThemeScore, Trend, WeeklyReport,
};

/// Days in a scoring week
const DAYS_PER_WEEK: i64 = 7;

/// Minimum prior-week confidence before a trend is inferred
const TREND_BASELINE_CONFIDENCE: f64 = 0.3;

/// Week-over-week score delta that flips a trend away from stable
const TREND_DELTA: f64 = 1.0;

/// Weekly score floor for the "highest theme" highlight
const HIGHLIGHT_SCORE_FLOOR: f64 = 3.0;

/// Weekly score floor for the "needs attention" highlight
const ATTENTION_SCORE_FLOOR: f64 = 5.0;

/// Weekly score floor for prompt generation
const PROMPT_SCORE_FLOOR: f64 = 2.0;

/// Maximum highlights per weekly report
const HIGHLIGHT_LIMIT: usize = 3;

/// Maximum prompts per weekly report
const PROMPT_LIMIT: usize = 3;

/// Stateless scoring engine over a record store.
pub struct ScoringEngine<S> {
    store: S,
    config: ScoringConfig,
    selector: Box<dyn PromptSelector>,
    instance_id: String,
}

impl<S: RecordStore> ScoringEngine<S> {
    /// Create an engine with the production configuration and random
    /// prompt selection.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ScoringConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(store: S, config: ScoringConfig) -> Self {
        Self {
            store,
            config,
            selector: Box::new(RandomPromptSelector),
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Replace the prompt selector, e.g. with a deterministic one.
    pub fn with_prompt_selector(mut self, selector: Box<dyn PromptSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Version of the scoring algorithm, for callers that stamp outputs.
    pub fn algorithm_version(&self) -> &'static str {
        crate::ALGORITHM_VERSION
    }

    /// Score all twelve themes for one day.
    ///
    /// Missing records reduce confidence; a failed fetch aborts the call.
    /// Scores are returned in canonical theme order.
    pub fn calculate_daily_scores(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<ThemeScore>, ScoreError> {
        debug!(
            instance = %self.instance_id,
            user = user_id,
            date = %date,
            "calculating daily scores"
        );

        let usage = self.store.get_usage_record(user_id, date)?;
        let check_in = self.store.get_check_in_record(user_id, date)?;

        let features = FeatureExtractor::extract(date, usage.as_ref(), check_in.as_ref())?;
        let scorer = ThemeScorer::new(&self.config);

        Ok(Theme::ALL
            .iter()
            .map(|theme| scorer.score(*theme, &features))
            .collect())
    }

    /// Build the weekly report for the week containing `week_start`.
    ///
    /// The start date is snapped back to its Monday. Trends compare against
    /// the immediately preceding week, recomputed through the same pipeline.
    pub fn calculate_weekly_report(
        &self,
        user_id: &str,
        week_start: NaiveDate,
    ) -> Result<WeeklyReport, ScoreError> {
        let monday = monday_of(week_start);
        let week_end = monday + Duration::days(DAYS_PER_WEEK - 1);

        debug!(
            instance = %self.instance_id,
            user = user_id,
            week_start = %monday,
            "calculating weekly report"
        );

        let current = self.aggregate_week(user_id, monday)?;
        let previous = self.aggregate_week(user_id, monday - Duration::days(DAYS_PER_WEEK))?;

        let scores = apply_trends(current, &previous);
        let highlights = generate_highlights(&scores);
        let reflective_prompts = self.generate_prompts(&scores);

        Ok(WeeklyReport {
            week_start_date: monday,
            week_end_date: week_end,
            scores,
            highlights,
            reflective_prompts,
        })
    }

    /// Score each day of the week and aggregate per theme.
    fn aggregate_week(
        &self,
        user_id: &str,
        monday: NaiveDate,
    ) -> Result<Vec<ThemeScore>, ScoreError> {
        let mut daily = Vec::with_capacity(DAYS_PER_WEEK as usize);
        for offset in 0..DAYS_PER_WEEK {
            daily.push(self.calculate_daily_scores(user_id, monday + Duration::days(offset))?);
        }
        Ok(aggregate_daily_scores(&daily))
    }

    /// One prompt per top-scoring theme above the floor, at most three.
    fn generate_prompts(&self, scores: &[ThemeScore]) -> Vec<ReflectivePrompt> {
        let mut ranked: Vec<&ThemeScore> = scores.iter().collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        ranked
            .iter()
            .take(PROMPT_LIMIT)
            .filter(|s| s.score > PROMPT_SCORE_FLOOR)
            .filter_map(|s| {
                let pool = &themes::definition(s.theme).prompts;
                self.selector.pick(s.theme, pool).map(|prompt| ReflectivePrompt {
                    theme: s.theme,
                    prompt: prompt.to_string(),
                })
            })
            .collect()
    }
}

/// Monday of the week containing `date`.
fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Average each theme across its confident days.
///
/// Days with zero confidence are skipped entirely; weekly confidence is the
/// confident-day count over the week length. Contributor labels are merged
/// by frequency across confident days.
fn aggregate_daily_scores(daily: &[Vec<ThemeScore>]) -> Vec<ThemeScore> {
    Theme::ALL
        .iter()
        .enumerate()
        .map(|(idx, theme)| {
            let mut sum = 0.0;
            let mut count = 0usize;
            let mut contributor_counts: HashMap<&str, usize> = HashMap::new();
            let mut contributor_order: Vec<&str> = Vec::new();

            for day in daily {
                let score = &day[idx];
                if score.confidence > 0.0 {
                    sum += score.score;
                    count += 1;
                    for label in &score.top_contributors {
                        let entry = contributor_counts.entry(label.as_str()).or_insert(0);
                        if *entry == 0 {
                            contributor_order.push(label.as_str());
                        }
                        *entry += 1;
                    }
                }
            }

            let (score, confidence) = if count > 0 {
                (
                    round_one_decimal(sum / count as f64),
                    count as f64 / DAYS_PER_WEEK as f64,
                )
            } else {
                (0.0, 0.0)
            };

            // Most frequent labels first; first-seen order breaks ties
            contributor_order.sort_by(|a, b| contributor_counts[b].cmp(&contributor_counts[a]));
            let top_contributors = contributor_order
                .iter()
                .take(3)
                .map(|label| label.to_string())
                .collect();

            ThemeScore {
                theme: *theme,
                score,
                confidence,
                trend: Trend::Stable,
                top_contributors,
                signal_breakdown: Vec::new(),
            }
        })
        .collect()
}

/// Annotate current scores with week-over-week trends.
///
/// A trend is only inferred when the prior week has enough data behind it;
/// below the baseline confidence the trend stays stable rather than guessing.
fn apply_trends(current: Vec<ThemeScore>, previous: &[ThemeScore]) -> Vec<ThemeScore> {
    current
        .into_iter()
        .map(|mut score| {
            let prev = previous.iter().find(|p| p.theme == score.theme);
            score.trend = match prev {
                Some(prev) if prev.confidence > TREND_BASELINE_CONFIDENCE => {
                    let diff = score.score - prev.score;
                    if diff >= TREND_DELTA {
                        Trend::Up
                    } else if diff <= -TREND_DELTA {
                        Trend::Down
                    } else {
                        Trend::Stable
                    }
                }
                _ => Trend::Stable,
            };
            score
        })
        .collect()
}

/// Derive up to three highlights, in fixed priority order: the highest
/// scoring theme, the lowest-scoring theme trending down, and the highest
/// scoring theme trending up.
fn generate_highlights(scores: &[ThemeScore]) -> Vec<ThemeHighlight> {
    let mut highlights = Vec::new();

    let mut ranked: Vec<&ThemeScore> = scores.iter().collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    if let Some(top) = ranked.first() {
        if top.score > HIGHLIGHT_SCORE_FLOOR {
            highlights.push(ThemeHighlight {
                theme: top.theme,
                kind: HighlightKind::Highest,
                message: format!(
                    "{} was your most prominent theme this week ({}/10)",
                    themes::definition(top.theme).name,
                    top.score
                ),
            });
        }
    }

    // Lowest absolute score among down-trending themes, not the biggest
    // drop; a theme idling near zero wins over one that fell furthest.
    let mut improved: Vec<&ThemeScore> = scores.iter().filter(|s| s.trend == Trend::Down).collect();
    improved.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    if let Some(best) = improved.first() {
        highlights.push(ThemeHighlight {
            theme: best.theme,
            kind: HighlightKind::MostImproved,
            message: format!(
                "{} showed improvement this week",
                themes::definition(best.theme).name
            ),
        });
    }

    let mut rising: Vec<&ThemeScore> = scores
        .iter()
        .filter(|s| s.trend == Trend::Up && s.score > ATTENTION_SCORE_FLOOR)
        .collect();
    rising.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    if let Some(worst) = rising.first() {
        highlights.push(ThemeHighlight {
            theme: worst.theme,
            kind: HighlightKind::NeedsAttention,
            message: format!(
                "{} is trending upward - consider reflection",
                themes::definition(worst.theme).name
            ),
        });
    }

    highlights.truncate(HIGHLIGHT_LIMIT);
    highlights
}
