//! flotool - Flonest repository automation tools
//!
//! A single control plane for repo operations: authenticated push via
//! the auth proxy, stage-and-commit automation, a frontend repo-map
//! generator, and mobile UX patches. All tools are invoked through the
//! registry; there is no per-tool binary.

pub mod commands;
pub mod error;
pub mod models;
pub mod registry;
pub mod services;
pub mod utils;

pub use error::{FlotoolError, Result};
pub use registry::Tool;
