// src/application/services/orchestrator.rs
use std::{sync::Arc, time::Duration};

use crate::application::ports::generation::{
    ContentProvider, ContentSynthesizer, ProviderError,
};
use crate::domain::generation::{GeneratedContent, GenerationRequest};

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Live,
    Offline,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Offline => "offline",
        }
    }
}

/// Chooses between the live provider and the offline synthesizer.
///
/// Generation never fails at this layer: without a configured provider the
/// synthesizer is used directly, and any provider failure (including the
/// timeout bound enforced here) is logged and replaced by synthesized content.
pub struct GenerationOrchestrator {
    provider: Option<Arc<dyn ContentProvider>>,
    synthesizer: Arc<dyn ContentSynthesizer>,
    provider_timeout: Duration,
}

impl GenerationOrchestrator {
    pub fn new(
        provider: Option<Arc<dyn ContentProvider>>,
        synthesizer: Arc<dyn ContentSynthesizer>,
    ) -> Self {
        Self {
            provider,
            synthesizer,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    pub fn mode(&self) -> GenerationMode {
        if self.provider.is_some() {
            GenerationMode::Live
        } else {
            GenerationMode::Offline
        }
    }

    pub async fn orchestrate(&self, request: &GenerationRequest) -> GeneratedContent {
        let content = match &self.provider {
            None => {
                tracing::debug!(topic = request.topic(), "offline mode, synthesizing content");
                self.synthesize(request)
            }
            Some(provider) => match self.call_provider(provider.as_ref(), request).await {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        topic = request.topic(),
                        error = %err,
                        "provider generation failed, using fallback content"
                    );
                    self.synthesize(request)
                }
            },
        };
        content.normalized(request.topic())
    }

    async fn call_provider(
        &self,
        provider: &dyn ContentProvider,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, ProviderError> {
        let call = provider.generate(
            request.topic(),
            request.keywords(),
            request.target_word_count(),
        );
        match tokio::time::timeout(self.provider_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.provider_timeout)),
        }
    }

    fn synthesize(&self, request: &GenerationRequest) -> GeneratedContent {
        self.synthesizer.synthesize(
            request.topic(),
            request.keywords(),
            request.target_word_count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSynthesizer {
        calls: AtomicUsize,
    }

    impl ContentSynthesizer for CountingSynthesizer {
        fn synthesize(&self, topic: &str, _: &[String], _: u32) -> GeneratedContent {
            self.calls.fetch_add(1, Ordering::SeqCst);
            GeneratedContent::new(
                format!("Fallback {topic}"),
                format!("# Fallback {topic}\n\n## Introduction\n\nOffline."),
            )
        }
    }

    enum Behaviour {
        Succeed(&'static str),
        Fail,
        Hang,
    }

    struct StubProvider {
        behaviour: Behaviour,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                calls: AtomicUsize::new(0),
            }
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
            _: &[String],
            _: u32,
        ) -> Result<GeneratedContent, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behaviour {
                Behaviour::Succeed(raw) => Ok(GeneratedContent::from_markdown(raw, topic)),
                Behaviour::Fail => Err(ProviderError::Status {
                    status: 503,
                    message: "unavailable".into(),
                }),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Err(ProviderError::EmptyResponse)
                }
            }
        }
    }

    fn request(topic: &str) -> GenerationRequest {
        GenerationRequest::new(Some(topic.into()), vec!["rust".into()], None, None).unwrap()
    }

    #[tokio::test]
    async fn offline_mode_uses_synthesizer_only() {
        let synthesizer = Arc::new(CountingSynthesizer::default());
        let orchestrator = GenerationOrchestrator::new(None, synthesizer.clone());
        assert_eq!(orchestrator.mode(), GenerationMode::Offline);

        let content = orchestrator.orchestrate(&request("Edge AI")).await;
        assert_eq!(content.title, "Fallback Edge AI");
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn provider_success_is_returned() {
        let synthesizer = Arc::new(CountingSynthesizer::default());
        let provider = Arc::new(StubProvider::new(Behaviour::Succeed(
            "# Live Title\n\nBody text.",
        )));
        let orchestrator = GenerationOrchestrator::new(Some(provider.clone()), synthesizer.clone());
        assert_eq!(orchestrator.mode(), GenerationMode::Live);

        let content = orchestrator.orchestrate(&request("Edge AI")).await;
        assert_eq!(content.title, "Live Title");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_failure_falls_back_without_error() {
        let synthesizer = Arc::new(CountingSynthesizer::default());
        let provider = Arc::new(StubProvider::new(Behaviour::Fail));
        let orchestrator = GenerationOrchestrator::new(Some(provider.clone()), synthesizer.clone());

        for _ in 0..3 {
            let content = orchestrator.orchestrate(&request("Edge AI")).await;
            assert!(!content.title.is_empty());
            assert!(content.has_heading());
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn provider_timeout_falls_back() {
        let synthesizer = Arc::new(CountingSynthesizer::default());
        let provider = Arc::new(StubProvider::new(Behaviour::Hang));
        let orchestrator = GenerationOrchestrator::new(Some(provider), synthesizer.clone())
            .with_provider_timeout(Duration::from_millis(50));

        let content = orchestrator.orchestrate(&request("Edge AI")).await;
        assert_eq!(content.title, "Fallback Edge AI");
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn headingless_provider_output_is_normalized() {
        let synthesizer = Arc::new(CountingSynthesizer::default());
        let provider = Arc::new(StubProvider::new(Behaviour::Succeed("Plain prose only.")));
        let orchestrator = GenerationOrchestrator::new(Some(provider), synthesizer);

        let content = orchestrator.orchestrate(&request("Edge AI")).await;
        assert_eq!(content.title, "Edge AI");
        assert_eq!(content.body, "# Edge AI\n\nPlain prose only.");
    }
}
