//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Probing, walking, and destination file operations
//! - `npm` - Global prefix discovery

pub mod fs;
pub mod npm;

pub use npm::NpmPrefix;
