//! # SentiView Web
//!
//! HTTP front end for SentiView: a submission form, a results page with
//! charts, a JSON API and a health endpoint.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod pages;
pub mod routes;
pub mod service;

pub use app::{build_classifier, build_translator, serve, AppState};
pub use error::{WebError, WebResult};
pub use pages::ChartLinks;
pub use routes::create_router;
pub use service::{SentimentService, Submission};
