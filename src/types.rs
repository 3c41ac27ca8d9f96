use serde::{Deserialize, Serialize};
use std::fmt;

/// Model identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ModelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Predefined Bedrock model IDs
impl ModelId {
    // Anthropic models
    pub const CLAUDE_3_HAIKU: &'static str = "anthropic.claude-3-haiku-20240307-v1:0";
    pub const CLAUDE_3_SONNET: &'static str = "anthropic.claude-3-sonnet-20240229-v1:0";
    pub const CLAUDE_3_OPUS: &'static str = "anthropic.claude-3-opus-20240229-v1:0";
    pub const CLAUDE_3_5_SONNET: &'static str = "anthropic.claude-3-5-sonnet-20240620-v1:0";

    // Meta models
    pub const LLAMA_3_8B_INSTRUCT: &'static str = "meta.llama3-8b-instruct-v1:0";
    pub const LLAMA_3_70B_INSTRUCT: &'static str = "meta.llama3-70b-instruct-v1:0";

    // Mistral models
    pub const MISTRAL_LARGE: &'static str = "mistral.mistral-large-2402-v1:0";
}

/// Provider identifier, used as a metrics label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderId(String);

impl ProviderId {
    pub const BEDROCK: &'static str = "bedrock";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request ID for tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token usage reported at the end of a conversation turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}
