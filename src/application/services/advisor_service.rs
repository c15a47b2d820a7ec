//! AI admission advisor.

use serde_json::json;
use std::sync::Arc;

use crate::domain::chat_provider::ChatProvider;
use crate::domain::entities::{ChatMessage, ChatPrompt, ChatRole, StudentContext};
use crate::error::AppError;

const SYSTEM_PROMPT: &str = "你是一位经验丰富的高考志愿填报顾问。请根据学生提供的分数、位次、省份和科类，\
结合历年录取分数与位次数据，给出专业、客观、可操作的志愿填报建议。

回答时请遵循：
1. 以数据为依据，不夸大录取把握，不做保证；
2. 结合学生的兴趣、职业规划和地域偏好给出个性化建议；
3. 综合考虑院校层次、专业实力、所在城市和就业前景；
4. 按冲刺、稳妥、保底三个梯度组织推荐；
5. 对不确定的信息明确说明，并提醒学生以省考试院和高校招生章程等官方信息为准。

请使用简体中文，语气友好、耐心。";

/// Builds advisor prompts and forwards them to the chat provider.
///
/// The provider is optional: deployments without an API key still serve every
/// other endpoint and answer chat requests with [`AppError::Unavailable`].
pub struct AdvisorService {
    provider: Option<Arc<dyn ChatProvider>>,
}

impl AdvisorService {
    pub fn new(provider: Option<Arc<dyn ChatProvider>>) -> Self {
        Self { provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Answers the latest message of a conversation.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if there are no messages or the last one is blank
    /// - [`AppError::Unavailable`] if no provider is configured
    /// - [`AppError::Upstream`] if the provider fails
    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        context: StudentContext,
    ) -> Result<String, AppError> {
        let prompt = build_prompt(messages, &context)?;

        let provider = self.provider.as_ref().ok_or_else(|| {
            AppError::unavailable(
                "AI advisor is not configured",
                json!({ "reason": "ANTHROPIC_API_KEY is not set" }),
            )
        })?;

        metrics::counter!("advisor_requests_total").increment(1);
        let reply = provider.complete(prompt).await.inspect_err(|_| {
            metrics::counter!("advisor_failures_total").increment(1);
        })?;

        Ok(reply)
    }
}

/// Prefixes the student context onto the last message, which is always sent
/// as a user turn.
fn build_prompt(
    mut messages: Vec<ChatMessage>,
    context: &StudentContext,
) -> Result<ChatPrompt, AppError> {
    let last = messages.pop().ok_or_else(|| {
        AppError::bad_request("Messages must not be empty", json!({ "field": "messages" }))
    })?;

    if last.content.trim().is_empty() {
        return Err(AppError::bad_request(
            "The last message must not be blank",
            json!({ "field": "messages" }),
        ));
    }

    let content = match context.render() {
        Some(prefix) => format!("{prefix}\n\n用户问题：{}", last.content),
        None => last.content,
    };

    messages.push(ChatMessage {
        role: ChatRole::User,
        content,
    });

    Ok(ChatPrompt {
        system: SYSTEM_PROMPT.to_string(),
        messages,
    })
}
