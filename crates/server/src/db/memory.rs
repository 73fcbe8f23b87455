//! In-process result store, used when no database is configured.

use std::cmp::Ordering;
use std::sync::RwLock;

use chrono::Utc;

use crate::db::store::{NewResult, StoredResult};
use crate::error::AppError;

/// Rows in insertion order. The write lock serializes id assignment;
/// readers share the read lock and only ever see whole rows.
#[derive(Debug, Default)]
pub struct MemoryResults {
    rows: RwLock<Vec<StoredResult>>,
}

impl MemoryResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, new: &NewResult) -> Result<StoredResult, AppError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| AppError::StorageUnavailable("result store lock poisoned".into()))?;

        let id = rows.last().map(|r| r.id + 1).unwrap_or(1);
        let stored = StoredResult {
            id,
            player_name: new.player_name.clone(),
            score: new.score,
            tries: new.tries,
            matches: new.matches,
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    pub fn list_recent(&self, limit: i64) -> Result<Vec<StoredResult>, AppError> {
        self.sorted_by(limit, |a, b| {
            b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
        })
    }

    pub fn leaderboard(&self, top_n: i64) -> Result<Vec<StoredResult>, AppError> {
        self.sorted_by(top_n, leaderboard_order)
    }

    pub fn len(&self) -> Result<usize, AppError> {
        self.rows
            .read()
            .map(|rows| rows.len())
            .map_err(|_| AppError::StorageUnavailable("result store lock poisoned".into()))
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }

    fn sorted_by<F>(&self, limit: i64, compare: F) -> Result<Vec<StoredResult>, AppError>
    where
        F: FnMut(&StoredResult, &StoredResult) -> Ordering,
    {
        let mut rows = self
            .rows
            .read()
            .map_err(|_| AppError::StorageUnavailable("result store lock poisoned".into()))?
            .clone();
        rows.sort_by(compare);
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}

/// Score descending, then tries ascending, then insertion order.
pub fn leaderboard_order(a: &StoredResult, b: &StoredResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.tries.cmp(&b.tries))
        .then(a.id.cmp(&b.id))
}
