//! Ports - interfaces the domain expects infrastructure to provide

pub mod global_prefix;

pub use global_prefix::{FixedPrefix, GlobalPrefix};
