//! Request-service boundary of the study backend.
//!
//! `StudyApi` is the only way the workspace talks to the backend;
//! `HttpStudyClient` is the production implementation.

mod api;
mod http;

pub use api::{ApiFuture, StudyApi};
pub use http::HttpStudyClient;
