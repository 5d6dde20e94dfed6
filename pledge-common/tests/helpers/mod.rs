//! Shared helpers for pledge-common integration tests

pub mod log_capture;
