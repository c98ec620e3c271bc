// src/application/services/mod.rs
pub mod orchestrator;

use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, ContentProviderPort, ContentSynthesizerPort, SlugGeneratorPort},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
};

pub use orchestrator::{DEFAULT_PROVIDER_TIMEOUT, GenerationMode, GenerationOrchestrator};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    orchestrator: Arc<GenerationOrchestrator>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        provider: Option<Arc<ContentProviderPort>>,
        synthesizer: Arc<ContentSynthesizerPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        provider_timeout: std::time::Duration,
    ) -> Self {
        let orchestrator = Arc::new(
            GenerationOrchestrator::new(provider, synthesizer)
                .with_provider_timeout(provider_timeout),
        );

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&orchestrator),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            article_commands,
            article_queries,
            orchestrator,
        }
    }

    pub fn generation_mode(&self) -> GenerationMode {
        self.orchestrator.mode()
    }
}
