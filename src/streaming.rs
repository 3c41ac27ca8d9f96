use crate::models::StreamEvent;
use crate::error::ModelResult;
use futures::Stream;
use std::pin::Pin;

/// A streaming response from Bedrock
pub type StreamingResponse = Pin<Box<dyn Stream<Item = ModelResult<StreamEvent>> + Send>>;
