//! Shared utilities: code generation and URL formatting.

pub mod code_generator;
pub mod short_url;
