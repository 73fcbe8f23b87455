//! Result store: an append-only collection of finished games.
//!
//! Two backends share the same contract. Ids are strictly increasing in
//! insertion order and assigned by the backend, as is `created_at`.
//! Rows are never updated or deleted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::db::memory::MemoryResults;
use crate::db::results;
use crate::error::AppError;

/// A validated result ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResult {
    pub player_name: String,
    pub score: i32,
    pub tries: i32,
    pub matches: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StoredResult {
    pub id: i64,
    pub player_name: String,
    pub score: i32,
    pub tries: i32,
    pub matches: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub enum ResultStore {
    Postgres(PgPool),
    Memory(Arc<MemoryResults>),
}

impl ResultStore {
    pub fn in_memory() -> Self {
        ResultStore::Memory(Arc::new(MemoryResults::new()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResultStore::Postgres(_) => "postgres",
            ResultStore::Memory(_) => "memory",
        }
    }

    pub async fn insert(&self, new: &NewResult) -> Result<StoredResult, AppError> {
        let stored = match self {
            ResultStore::Postgres(pool) => results::insert_result(pool, new).await?,
            ResultStore::Memory(mem) => mem.insert(new)?,
        };
        tracing::info!(
            id = stored.id,
            player = %stored.player_name,
            score = stored.score,
            "Stored game result"
        );
        Ok(stored)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<StoredResult>, AppError> {
        match self {
            ResultStore::Postgres(pool) => results::get_recent_results(pool, limit).await,
            ResultStore::Memory(mem) => mem.list_recent(limit),
        }
    }

    pub async fn leaderboard(&self, top_n: i64) -> Result<Vec<StoredResult>, AppError> {
        match self {
            ResultStore::Postgres(pool) => results::get_leaderboard(pool, top_n).await,
            ResultStore::Memory(mem) => mem.leaderboard(top_n),
        }
    }
}
