//! Tests for the admin service
