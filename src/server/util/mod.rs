//! Shared helpers used across the server layers.

pub mod parse;
