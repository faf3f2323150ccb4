//! Leadform - intake for the Business Information Form
//!
//! The `form` module holds the two-step form model, validation and
//! controller. `rest` serves the submit endpoint that persists responses
//! through a `store`, and `client` talks to it.

pub mod client;
pub mod config;
pub mod form;
pub mod logging;
pub mod notify;
pub mod rest;
pub mod store;
