//! Shared utilities

pub mod command;
