//! Tool entry points

pub mod gitcommit;
pub mod gitpush;
pub mod mobile_fix;
pub mod repomap;
