//! API module for HTTP endpoints
//!
//! This module exposes the search engine over a REST API.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
