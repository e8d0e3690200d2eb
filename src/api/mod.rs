//! HTTP API consumed by the client: `POST /generate`, `GET /history`,
//! `GET /history/{id}`.

pub mod client;

pub use client::QuizApiClient;
