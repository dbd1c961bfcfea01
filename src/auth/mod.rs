//! Identity-provider integration
//!
//! Thin glue around two external OAuth providers; not exercised by any core
//! path. The demo session in `crate::session` stands in for this at runtime.

#[cfg(feature = "server")]
mod enrichment;
mod providers;
mod token;

#[cfg(feature = "server")]
pub use enrichment::*;
pub use providers::*;
pub use token::*;
