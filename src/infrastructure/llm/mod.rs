//! Chat-completion provider implementations.
//!
//! - [`AnthropicClient`] - Anthropic Messages API over `reqwest`

pub mod anthropic_client;

pub use anthropic_client::{AnthropicClient, AnthropicSettings};
