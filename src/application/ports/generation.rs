// src/application/ports/generation.rs
use crate::domain::generation::GeneratedContent;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure of the external generative provider. Never surfaced past the orchestrator.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request timed out after {0:?}")]
    Timeout(Duration),
    #[error("provider transport failure: {0}")]
    Transport(String),
    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("provider returned an empty response")]
    EmptyResponse,
    #[error("provider response could not be parsed: {0}")]
    Malformed(String),
}

/// Live content generation. One outbound call per invocation, no internal retry.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(
        &self,
        topic: &str,
        keywords: &[String],
        target_word_count: u32,
    ) -> Result<GeneratedContent, ProviderError>;
}

/// Offline content generation. Total: never fails, never performs I/O.
pub trait ContentSynthesizer: Send + Sync {
    fn synthesize(
        &self,
        topic: &str,
        keywords: &[String],
        target_word_count: u32,
    ) -> GeneratedContent;
}
