// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, services::GenerationOrchestrator},
    domain::article::{ArticleWriteRepository, services::ArticleSlugService},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) orchestrator: Arc<GenerationOrchestrator>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        orchestrator: Arc<GenerationOrchestrator>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            orchestrator,
            slug_service,
            clock,
        }
    }
}
