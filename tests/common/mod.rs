//! Shared helpers for slink integration tests

#![allow(dead_code)]

pub mod env;

pub use env::{future, past, set_mtime, stop, wait_for_exit, TestEnv, TestResult};
