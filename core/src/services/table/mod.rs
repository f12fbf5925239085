//! Table inventory module
//!
//! - Table number allocation (hole reuse before extending the maximum)
//! - Batch creation, listing, update and deletion of tables

mod allocator;
mod service;

#[cfg(test)]
mod tests;

pub use allocator::{allocate, parse_quantity, verify_allocation, QUANTITY_ERROR};
pub use service::TableService;
