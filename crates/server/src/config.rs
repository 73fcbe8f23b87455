use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    /// Postgres URL. Unset means results are kept in memory.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Rows returned by `GET /api/results` when no `limit` is given.
    pub results_limit: i64,
    /// Rows returned by `GET /api/leaderboard` when no `limit` is given.
    pub leaderboard_size: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("PORT", 8000),
            results_limit: env_or("RESULTS_LIMIT", 50),
            leaderboard_size: env_or("LEADERBOARD_SIZE", 10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "0.0.0.0".to_string(),
            port: 8000,
            results_limit: 50,
            leaderboard_size: 10,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("MEMORY_TEST_ENV_OR_GARBAGE", "not-a-number");
        assert_eq!(env_or("MEMORY_TEST_ENV_OR_GARBAGE", 42u16), 42);

        env::set_var("MEMORY_TEST_ENV_OR_VALID", "9001");
        assert_eq!(env_or("MEMORY_TEST_ENV_OR_VALID", 42u16), 9001);

        assert_eq!(env_or("MEMORY_TEST_ENV_OR_UNSET", 7i64), 7);
    }
}
