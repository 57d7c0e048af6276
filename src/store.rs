//! Record store boundary
//!
//! The engine reads daily records through the [`RecordStore`] trait. A
//! lookup returns `Ok(None)` when no record exists for the date; an `Err`
//! means the fetch itself failed and the enclosing computation must abort.
//! The two are never conflated.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{DailyCheckInRecord, DailyUsageRecord};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Read access to persisted daily records, keyed by user and calendar date.
pub trait RecordStore {
    /// Fetch the usage record for a user and date, if one exists.
    fn get_usage_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Option<DailyUsageRecord>>;

    /// Fetch the check-in record for a user and date, if one exists.
    fn get_check_in_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Option<DailyCheckInRecord>>;
}

/// In-memory record store for tests, tooling, and local development.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    usage: HashMap<(String, NaiveDate), DailyUsageRecord>,
    check_ins: HashMap<(String, NaiveDate), DailyCheckInRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a usage record for a user. The record's own date
    /// is the storage key.
    pub fn insert_usage(&mut self, user_id: &str, record: DailyUsageRecord) {
        self.usage.insert((user_id.to_string(), record.date), record);
    }

    /// Insert or replace a check-in record for a user.
    pub fn insert_check_in(&mut self, user_id: &str, record: DailyCheckInRecord) {
        self.check_ins
            .insert((user_id.to_string(), record.date), record);
    }

    pub fn usage_count(&self) -> usize {
        self.usage.len()
    }

    pub fn check_in_count(&self) -> usize {
        self.check_ins.len()
    }
}

impl RecordStore for MemoryStore {
    fn get_usage_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Option<DailyUsageRecord>> {
        Ok(self.usage.get(&(user_id.to_string(), date)).cloned())
    }

    fn get_check_in_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Option<DailyCheckInRecord>> {
        Ok(self.check_ins.get(&(user_id.to_string(), date)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    }

    fn make_check_in(date: NaiveDate) -> DailyCheckInRecord {
        DailyCheckInRecord {
            id: None,
            date,
            mood_score: 6,
            primary_theme: Theme::Sloth,
            journal_entry: None,
            source: None,
        }
    }

    #[test]
    fn test_missing_record_is_none_not_error() {
        let store = MemoryStore::new();
        let usage = store.get_usage_record("user-1", date()).unwrap();
        assert!(usage.is_none());
    }

    #[test]
    fn test_roundtrip_check_in() {
        let mut store = MemoryStore::new();
        store.insert_check_in("user-1", make_check_in(date()));

        let found = store.get_check_in_record("user-1", date()).unwrap();
        assert_eq!(found.unwrap().primary_theme, Theme::Sloth);

        // Different user, same date
        let other = store.get_check_in_record("user-2", date()).unwrap();
        assert!(other.is_none());
    }

    #[test]
    fn test_insert_replaces_same_key() {
        let mut store = MemoryStore::new();
        store.insert_check_in("user-1", make_check_in(date()));
        let mut replacement = make_check_in(date());
        replacement.mood_score = 2;
        store.insert_check_in("user-1", replacement);

        assert_eq!(store.check_in_count(), 1);
        let found = store.get_check_in_record("user-1", date()).unwrap().unwrap();
        assert_eq!(found.mood_score, 2);
    }
}
