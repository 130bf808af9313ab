//! Domain Policies
//!
//! Rules that decide which source paths take part in a sync.

mod inclusion;

pub use inclusion::{is_of_interest, is_within, InclusionFilter};
