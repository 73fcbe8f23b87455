use std::time::Duration;

use memory_core::GameResult;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// A row as returned by the result store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredResult {
    pub id: i64,
    pub player_name: String,
    pub score: i32,
    pub tries: i32,
    pub matches: i32,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    result: StoredResult,
}

pub struct ResultsClient {
    client: Client,
    base_url: String,
}

impl ResultsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent("MemoryMatch/1.0")
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a finished game. Any non-2xx answer is an error, never a success.
    ///
    /// `matches` carries the true matched-pair count.
    pub async fn submit(&self, result: &GameResult) -> Result<StoredResult, ClientError> {
        let resp = self
            .client
            .post(format!("{}/api/results", self.base_url))
            .json(result)
            .send()
            .await?;

        let body: SubmitResponse = parse(resp).await?;
        tracing::info!(id = body.result.id, "Result submitted");
        Ok(body.result)
    }

    /// Most recent results first.
    pub async fn recent(&self, limit: Option<u32>) -> Result<Vec<StoredResult>, ClientError> {
        self.get_list("/api/results", limit).await
    }

    /// Top results by score, then fewest tries.
    pub async fn leaderboard(&self, limit: Option<u32>) -> Result<Vec<StoredResult>, ClientError> {
        self.get_list("/api/leaderboard", limit).await
    }

    async fn get_list(
        &self,
        path: &str,
        limit: Option<u32>,
    ) -> Result<Vec<StoredResult>, ClientError> {
        let mut req = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(limit) = limit {
            req = req.query(&[("limit", limit)]);
        }
        parse(req.send().await?).await
    }
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json().await?)
}
