use serde::{Deserialize, Serialize};
use crate::types::{ModelId, TokenUsage};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Inference parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceParams {
    pub temperature: f32,
    pub max_tokens: i32,
    pub top_p: f32,
}

/// Conversation request handed to a [`crate::Provider`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverseRequest {
    pub model: ModelId,
    pub messages: Vec<ChatMessage>,
    pub inference: InferenceParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// One event of a streamed conversation turn
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    MessageStart {
        role: MessageRole,
    },
    TextDelta {
        index: i32,
        text: String,
    },
    ContentBlockStop {
        index: i32,
    },
    MessageStop {
        stop_reason: String,
    },
    Metadata {
        #[serde(skip_serializing_if = "Option::is_none")]
        usage: Option<TokenUsage>,
        #[serde(skip_serializing_if = "Option::is_none")]
        latency_ms: Option<i64>,
    },
}

impl StreamEvent {
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::TextDelta { text, .. } => Some(text),
            _ => None,
        }
    }
}
