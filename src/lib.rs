//! Innerlens - scoring engine for self-reported behavioral signals
//!
//! Innerlens converts daily self-reported usage and mood check-ins into
//! normalized character-theme scores through a deterministic pipeline:
//! record fetch → feature extraction → per-theme scoring → weekly
//! aggregation → trend, highlight, and prompt generation.
//!
//! Scores are heuristic proxies from self-reported data, not validated
//! psychometrics.
//!
//! ## Modules
//!
//! - **engine**: Daily scoring and weekly report orchestration
//! - **features**: Feature extraction from raw daily records
//! - **scorer**: The generic weighted-signal theme scorer
//! - **config**: Weight tables and normalization thresholds
//! - **store**: Record store boundary and in-memory implementation

pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod normalize;
pub mod prompts;
pub mod scorer;
pub mod store;
pub mod themes;
pub mod types;

pub use config::{ScoringConfig, Signal, MIN_CONFIDENCE, SELF_REPORT_BOOST};
pub use engine::ScoringEngine;
pub use error::ScoreError;
pub use features::FeatureExtractor;
pub use prompts::{FixedPromptSelector, PromptSelector, RandomPromptSelector};
pub use store::{MemoryStore, RecordStore, StoreError};
pub use types::{
    DailyCheckInRecord, DailyUsageRecord, ExtractedFeatures, HighlightKind, ReflectivePrompt,
    SignalContribution, Theme, ThemeHighlight, ThemeScore, Trend, WeeklyReport,
};

/// Version of the scoring algorithm, stamped onto outputs by callers
pub const ALGORITHM_VERSION: &str = "1.0";

/// Crate version, for provenance in tooling output
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
