//! HTTP layer of the SWP restaurant backend, exported for the binary and
//! the integration tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
