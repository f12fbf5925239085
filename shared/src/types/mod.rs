//! Type definitions shared by the API surface
//!
//! - `response` - Plain message responses and health checks

pub mod response;

pub use response::{HealthResponse, MessageResponse};
