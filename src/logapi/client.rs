use crate::config::Config;
use crate::logapi::{LogApiError, LogApiResult};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const RECENT_LOGS_PATH: &str = "/api/v1/logs/recent";
pub const LOG_COUNT_PATH: &str = "/api/v1/logs/count";

/// Paging and filter parameters for the recent logs listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub limit: u32,
    pub offset: u32,
    pub code: Option<String>,
}

impl Default for LogQuery {
    fn default() -> Self {
        LogQuery {
            limit: 50,
            offset: 0,
            code: None,
        }
    }
}

impl LogQuery {
    pub fn new(limit: u32, offset: u32) -> Self {
        LogQuery {
            limit,
            offset,
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Query pairs in the order they are sent. An empty code is left out.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];

        if let Some(code) = self.code.as_deref().filter(|c| !c.is_empty()) {
            params.push(("code", code.to_string()));
        }

        params
    }
}

/// Blocking client for the log API.
///
/// Every request carries `Authorization: Bearer <token>` and
/// `Accept: application/json`, and is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct LogApiClient {
    base_url: String,
    auth_header: String,
    timeout: Duration,
    agent: ureq::Agent,
}

impl LogApiClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        LogApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Bearer {token}"),
            timeout,
            agent,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, &config.token, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the most recent logs, optionally filtered by code
    pub fn get_recent_logs(&self, query: &LogQuery) -> LogApiResult<Value> {
        self.get(RECENT_LOGS_PATH, &query.params())
    }

    /// Fetch the number of logs recorded for `code`
    pub fn get_log_count(&self, code: &str) -> LogApiResult<Value> {
        self.get(LOG_COUNT_PATH, &[("code", code.to_string())])
    }

    fn get(&self, path: &str, params: &[(&str, String)]) -> LogApiResult<Value> {
        let url = self.endpoint(path);
        debug!(url = %url, ?params, "GET");

        let mut request = self
            .agent
            .get(&url)
            .set("Authorization", &self.auth_header)
            .set("Accept", "application/json");
        for (key, value) in params {
            request = request.query(key, value);
        }

        let resp = match request.call() {
            Ok(resp) => resp,
            Err(e) => {
                let err = LogApiError::from(e);
                warn!(url = %url, status = ?err.status(), error = %err, "log API request failed");
                return Err(err);
            }
        };

        // ureq only fails on 4xx/5xx; anything else outside 2xx is an error here too
        let status = resp.status();
        if !(200..300).contains(&status) {
            let body = resp.into_string()?;
            warn!(url = %url, status, "log API returned non-success status");
            return Err(LogApiError::http(status, body));
        }

        let body = resp.into_string()?;
        Ok(serde_json::from_str::<Value>(&body)?)
    }
}
