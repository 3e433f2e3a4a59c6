//! Common utilities for integration tests

#![allow(dead_code)]

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_profiles_close,
    is_monotone_non_increasing,
    relative_error,
    small_config,
    RecordingSink,
};
