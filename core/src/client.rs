//! Stateless HTTP request builder and response parser.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `build_fetch` / `parse_fetch` do the same for a GET against any URL that
//! is expected to answer with JSON.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::TodoItem;

/// Synchronous, stateless client for the todo service.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_append_todo(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(item).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_append_todo(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Build a GET for an arbitrary JSON endpoint.
pub fn build_fetch(url: &str) -> Result<HttpRequest, ApiError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::InvalidUrl("URL is empty".to_string()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ApiError::InvalidUrl(format!("{url} is not an http(s) URL")));
    }
    Ok(HttpRequest {
        method: HttpMethod::Get,
        path: url.to_string(),
        headers: vec![("accept".to_string(), "application/json".to_string())],
        body: None,
    })
}

/// Status and decoded body of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Accept any 2xx response whose body is JSON.
pub fn parse_fetch(response: HttpResponse) -> Result<FetchResult, ApiError> {
    if !response.is_success() {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    let body = serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(FetchResult {
        status: response.status,
        body,
    })
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
