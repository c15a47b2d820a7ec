//! Port for the chat-completion provider behind the advisor.

use crate::domain::entities::ChatPrompt;
use crate::error::AppError;
use async_trait::async_trait;

/// Produces an assistant reply for a prompt.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::AnthropicClient`] - Anthropic Messages API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the provider fails or replies
    /// without text.
    async fn complete(&self, prompt: ChatPrompt) -> Result<String, AppError>;
}
