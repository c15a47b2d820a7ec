//! DTOs for the advisor chat endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ChatMessage, StudentContext};

/// `POST /api/ai/chat`
///
/// ```json
/// {
///   "messages": [{ "role": "user", "content": "600分能上哪些学校？" }],
///   "score": 600,
///   "province": "浙江"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub score: Option<f64>,
    pub rank: Option<i64>,
    pub province: Option<String>,
    pub category: Option<String>,
}

impl ChatRequest {
    pub fn into_parts(self) -> (Vec<ChatMessage>, StudentContext) {
        let context = StudentContext {
            score: self.score,
            rank: self.rank,
            province: self.province,
            category: self.category,
        };
        (self.messages, context)
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ChatRole;

    #[test]
    fn test_into_parts() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":"你好"}],"score":600,"province":"浙江"}"#,
        )
        .unwrap();
        let (messages, context) = req.into_parts();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::User);
        assert_eq!(context.score, Some(600.0));
        assert_eq!(context.province.as_deref(), Some("浙江"));
        assert_eq!(context.rank, None);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_str::<ChatRequest>(
            r#"{"messages":[{"role":"system","content":"x"}]}"#,
        );
        assert!(result.is_err());
    }
}
