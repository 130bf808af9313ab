//! Domain Layer
//!
//! Package, manifest and sync-record types plus the policies that decide
//! what gets mirrored.
//!
//! ## Structure
//!
//! - `entities/` - Manifest, resolved package, sync record
//! - `value_objects/` - Reserved paths, config warnings
//! - `policies/` - Inclusion filter
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
