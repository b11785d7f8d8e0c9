//! Query front-end for the subscriber usage-report backend.
//!
//! The library owns the whole query lifecycle: the search form
//! ([`forms::search::SearchForm`]) turns operator input into a
//! [`domain::query::QueryParams`] snapshot, the session controller
//! ([`services::session::ReportSession`]) runs one query at a time against
//! the [`client::ReportFetcher`] seam, and [`client::HttpReportClient`]
//! speaks the backend's JSON contract. The console binary behind the `cli`
//! feature is presentation only.

pub mod client;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod services;
