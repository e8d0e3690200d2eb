//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET/POST used by the quiz API client

pub mod http;

pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
