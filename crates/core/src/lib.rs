//! Impactviz Core - Donation impact calculation and narrative enrichment.
//!
//! This crate turns a donation amount into the metrics and comparison
//! phrases shown on the donor impact slideshow. It performs no I/O beyond
//! optionally reading a constants file; HTTP handling, donor lookup and
//! persistence belong to the calling application.

pub mod constants;
pub mod errors;
pub mod impact;
pub mod utils;

// Re-export common types from the impact module
pub use impact::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
