//! REST API client for the argentinadatos.com holiday service.
//!
//! Provides `ApiClient` for fetching the holiday list of a year from
//! `GET /v1/feriados/{year}`, and `ApiError` classifying failures into
//! the four kinds the UI knows how to describe.
//!
//! The endpoint is public and unauthenticated.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
