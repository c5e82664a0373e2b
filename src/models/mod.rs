//! Data models for flotool

pub mod credential;
pub mod remote;

pub use credential::*;
pub use remote::*;
