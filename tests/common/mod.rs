//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Custom assertions
//! - Replacer and chain fixtures
//! - Logger setup

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once per test binary so `RUST_LOG=debug` shows
/// library logging while tests run.
pub fn setup_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init()
            .ok();
    });
}
