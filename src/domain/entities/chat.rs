//! Conversation types for the admission advisor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Facts about the student that are prepended to the latest question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentContext {
    pub score: Option<f64>,
    pub rank: Option<i64>,
    pub province: Option<String>,
    pub category: Option<String>,
}

impl StudentContext {
    /// Renders the context as a single prefix line, or `None` when empty.
    pub fn render(&self) -> Option<String> {
        let mut out = String::new();
        if let Some(score) = self.score {
            out.push_str(&format!("学生分数：{score}分。"));
        }
        if let Some(rank) = self.rank {
            out.push_str(&format!("学生位次：{rank}。"));
        }
        if let Some(province) = self.province.as_deref().filter(|p| !p.is_empty()) {
            out.push_str(&format!("所在省份：{province}。"));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            out.push_str(&format!("科类：{category}。"));
        }
        (!out.is_empty()).then_some(out)
    }
}

/// A fully assembled prompt ready for the completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub system: String,
    pub messages: Vec<ChatMessage>,
}
