use crate::config::BedrockLlmConfig;
use crate::error::{ModelError, ModelResult};
use crate::models::{ChatMessage, ConverseRequest, InferenceParams, StreamEvent};
use crate::providers::{BedrockProviderFactory, Credentials, Provider, ProviderFactory};
use crate::streaming::StreamingResponse;
use crate::types::RequestId;
use crate::utils::mask_key;
use futures::StreamExt;
use metrics::{counter, decrement_gauge, histogram, increment_gauge};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, info_span, Instrument};

/// Streaming conversation client for one Bedrock model configuration.
///
/// The connection handle is opened once in [`BedrockLlm::new`] and shared by
/// every [`BedrockLlm::submit`] call.
pub struct BedrockLlm {
    config: BedrockLlmConfig,
    provider: Arc<dyn Provider>,
}

impl BedrockLlm {
    pub async fn new(config: BedrockLlmConfig) -> ModelResult<Self> {
        Self::with_factory(config, &BedrockProviderFactory).await
    }

    /// Build the client through `factory`.
    ///
    /// The config is validated first. Explicit credentials are used only when
    /// both keys are set, otherwise the SDK's default chain applies.
    pub async fn with_factory<F>(mut config: BedrockLlmConfig, factory: &F) -> ModelResult<Self>
    where
        F: ProviderFactory + ?Sized,
    {
        config.validate()?;

        let credentials = if config.uses_explicit_credentials() {
            info!(
                region = %config.region,
                access_key = %mask_key(&config.access_key),
                "BedrockLlm initialized with access key"
            );
            Credentials::Explicit {
                access_key: config.access_key.clone(),
                secret_key: config.secret_key.clone(),
            }
        } else {
            info!(
                region = %config.region,
                "BedrockLlm initialized without access key, using default credentials provider chain"
            );
            Credentials::DefaultChain
        };

        let provider = factory.connect(&config.region, &credentials).await?;
        Ok(Self { config, provider })
    }

    pub fn config(&self) -> &BedrockLlmConfig {
        &self.config
    }

    /// User message for `input`, rendered through the configured template
    pub fn user_message(&self, input: &str) -> ChatMessage {
        ChatMessage::user(self.config.render_user_input(input))
    }

    /// Request payload for `messages`; the system block is omitted when the prompt is empty
    pub fn build_request(&self, messages: &[ChatMessage]) -> ConverseRequest {
        let system = if self.config.prompt.is_empty() {
            None
        } else {
            Some(self.config.prompt.clone())
        };

        ConverseRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            inference: InferenceParams {
                temperature: self.config.temperature,
                max_tokens: self.config.max_tokens,
                top_p: self.config.top_p,
            },
            system,
        }
    }

    /// Send the conversation and return the model's response stream.
    ///
    /// Failures of the call itself come back as [`ModelError::Invocation`];
    /// nothing is retried.
    pub async fn submit(&self, messages: &[ChatMessage]) -> ModelResult<StreamingResponse> {
        let request = self.build_request(messages);
        let request_id = RequestId::new();
        let provider = self.provider.id().to_string();
        let model = request.model.to_string();
        let span = info_span!("converse_stream", request_id = %request_id, model = %model);

        increment_gauge!("llm_inflight_requests", 1.0, "provider" => provider.clone());
        let start = Instant::now();
        let result = self
            .provider
            .converse_stream(&request)
            .instrument(span)
            .await;
        histogram!("llm_request_latency_seconds", start.elapsed().as_secs_f64(), "provider" => provider.clone());
        decrement_gauge!("llm_inflight_requests", 1.0, "provider" => provider.clone());

        match result {
            Ok(stream) => {
                counter!("llm_requests_total", 1, "provider" => provider.clone(), "result" => "success");
                let mut first = true;
                let wrapped = stream.inspect(move |res| {
                    if let Ok(event) = res {
                        if first && event.text().is_some() {
                            histogram!("llm_first_token_latency_seconds", start.elapsed().as_secs_f64(), "provider" => provider.clone(), "model" => model.clone());
                            first = false;
                        }
                        if let StreamEvent::Metadata { usage: Some(usage), .. } = event {
                            counter!("llm_input_tokens_total", usage.input_tokens as u64, "provider" => provider.clone(), "model" => model.clone());
                            counter!("llm_output_tokens_total", usage.output_tokens as u64, "provider" => provider.clone(), "model" => model.clone());
                        }
                    }
                });
                Ok(Box::pin(wrapped))
            }
            Err(err) => {
                counter!("llm_requests_total", 1, "provider" => provider, "result" => "error");
                Err(ModelError::invocation(err))
            }
        }
    }
}
