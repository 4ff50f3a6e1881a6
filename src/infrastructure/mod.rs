//! Infrastructure layer: database integrations.

pub mod persistence;
