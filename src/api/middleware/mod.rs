//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, IP filtering, rate limiting, and observability
//! middleware.

pub mod auth;
pub mod ip_filter;
pub mod rate_limit;
pub mod tracing;
