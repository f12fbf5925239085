pub mod error;

pub use error::{error_response, json_error_handler, ApiError};
