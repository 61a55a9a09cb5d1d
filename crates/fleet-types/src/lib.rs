//! Shared types for fleet-advisor
//!
//! Vehicle, cargo and road enumerations, the output format setting and the
//! error taxonomy used by every other crate in the workspace.

mod error;
mod types;

pub use error::*;
pub use types::*;
