//! Validation types and host-does-IO client core for the todo demo.
//!
//! # Overview
//! Defines the validated records (`UserProfile`, `TodoItem`) and builds
//! `HttpRequest` values / parses `HttpResponse` values for the todo service
//! and for arbitrary outbound JSON fetches, without touching the network.
//! The caller executes the actual HTTP round-trip.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the `todo-server` crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod profile;
pub mod types;

pub use client::{build_fetch, parse_fetch, FetchResult, TodoClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use profile::{UserProfile, ValidationError, MIN_AGE};
pub use types::TodoItem;
