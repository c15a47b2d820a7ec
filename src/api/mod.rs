//! HTTP surface of the advisor.
//!
//! Handlers stay thin: extract and validate a DTO, call one service, return
//! JSON. Session checks, rate limits and request tracing live in
//! [`middleware`]; [`routes`] groups the endpoints into the public auth routes
//! and the protected data routes.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
