//! Tests for the table inventory module
