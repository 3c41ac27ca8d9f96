//! A thin Rust client for streaming conversations with AWS Bedrock models
//!
//! Builds a ConverseStream request from a [`BedrockLlmConfig`] and hands back
//! the response stream. Transport, authentication and the streaming protocol
//! are left to the AWS SDK.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod streaming;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use client::BedrockLlm;
pub use config::{BedrockLlmConfig, Mode};
pub use error::{BoxError, ModelError, ModelResult};
pub use models::{ChatMessage, ConverseRequest, InferenceParams, MessageRole, StreamEvent};
pub use providers::{BedrockProvider, BedrockProviderFactory, Credentials, Provider, ProviderFactory};
pub use streaming::StreamingResponse;
pub use types::{ModelId, ProviderId, RequestId, TokenUsage};

/// Initialize the logging system
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
