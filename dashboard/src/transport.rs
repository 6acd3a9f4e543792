//! Blocking executor for the core's `HttpRequest` values.
//!
//! # Design
//! One `ureq::Agent` with a fixed global timeout serves every outbound call.
//! Status codes are returned as data (`http_status_as_error(false)`) so the
//! core's `parse_*` functions decide what counts as failure; only transport
//! problems become `ApiError` here.

use std::time::Duration;

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl Transport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    /// Perform the round-trip. Blocks the calling thread.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match req.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match &req.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| self.map_error(e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn map_error(&self, err: ureq::Error) -> ApiError {
        match err {
            ureq::Error::Timeout(_) => ApiError::Timeout {
                seconds: self.timeout.as_secs(),
            },
            ureq::Error::Io(ref io) if io.kind() == std::io::ErrorKind::TimedOut => ApiError::Timeout {
                seconds: self.timeout.as_secs(),
            },
            other => ApiError::Transport(other.to_string()),
        }
    }
}
