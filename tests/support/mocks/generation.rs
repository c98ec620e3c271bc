// tests/support/mocks/generation.rs
use async_trait::async_trait;
use fude_core::application::ports::generation::{
    ContentProvider, ContentSynthesizer, ProviderError,
};
use fude_core::domain::generation::GeneratedContent;
use fude_core::infrastructure::generation::TemplateSynthesizer;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use super::time::FixedClock;

/// Wraps the real template synthesizer and counts invocations.
pub struct CountingSynthesizer {
    inner: TemplateSynthesizer,
    calls: AtomicUsize,
}

impl CountingSynthesizer {
    pub fn new() -> Self {
        Self {
            inner: TemplateSynthesizer::new(Arc::new(FixedClock)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentSynthesizer for CountingSynthesizer {
    fn synthesize(
        &self,
        topic: &str,
        keywords: &[String],
        target_word_count: u32,
    ) -> GeneratedContent {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.synthesize(topic, keywords, target_word_count)
    }
}

#[derive(Clone)]
pub enum ProviderBehavior {
    /// Returns this markdown verbatim.
    Succeed(String),
    Fail,
    /// Never answers; the orchestrator's timeout has to cut it off.
    Hang,
}

pub struct StubProvider {
    behavior: ProviderBehavior,
    calls: AtomicUsize,
    last_target: AtomicUsize,
}

impl StubProvider {
    pub fn new(behavior: ProviderBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_target: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Target word count passed on the most recent call.
    pub fn last_target(&self) -> usize {
        self.last_target.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        topic: &str,
        _keywords: &[String],
        target_word_count: u32,
    ) -> Result<GeneratedContent, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_target
            .store(target_word_count as usize, Ordering::SeqCst);
        match &self.behavior {
            ProviderBehavior::Succeed(markdown) => {
                Ok(GeneratedContent::from_markdown(markdown.clone(), topic))
            }
            ProviderBehavior::Fail => Err(ProviderError::Status {
                status: 503,
                message: "service unavailable".into(),
            }),
            ProviderBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(ProviderError::EmptyResponse)
            }
        }
    }
}
