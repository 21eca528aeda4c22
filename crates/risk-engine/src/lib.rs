//! Explainable risk profiling engine for crypto investor questionnaires.
//!
//! The `questionnaire` module holds the whole domain: the answer codebook,
//! input validation, the scoring rubric, and the HTTP router exposing the
//! assessment endpoint. `config`, `telemetry`, and `error` carry the service
//! plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod questionnaire;
pub mod telemetry;
