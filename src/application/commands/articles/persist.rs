// src/application/commands/articles/persist.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleBody, ArticleTitle, NewArticle},
        errors::DomainError,
        generation::{GeneratedContent, GenerationRequest},
    },
};

/// Upper bound on slug reassignments after a uniqueness conflict.
pub const MAX_SLUG_ATTEMPTS: usize = 5;

impl ArticleCommandService {
    /// Assigns a slug and durably stores the generated article as published.
    ///
    /// A slug conflict reported by the store is retried with a strictly newer
    /// timestamp suffix; only genuine storage faults are returned as errors.
    pub async fn persist(
        &self,
        content: GeneratedContent,
        request: &GenerationRequest,
    ) -> ApplicationResult<Article> {
        let title = ArticleTitle::new(content.title)?;
        let body = ArticleBody::new(content.body)?;
        let now = self.clock.now();

        let mut slug = self.slug_service.generate(&title)?;
        let mut new_article = NewArticle::published(
            title,
            slug.clone(),
            body,
            request.topic(),
            request.keywords_display(),
            request.kind(),
            now,
        );

        let mut attempt = 1;
        loop {
            match self.write_repo.insert(new_article.clone()).await {
                Ok(article) => return Ok(article),
                Err(DomainError::Conflict(reason)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::debug!(slug = %slug, attempt, %reason, "slug taken, reassigning");
                    slug = self
                        .slug_service
                        .next_after(&new_article.title, slug.timestamp_suffix())?;
                    new_article = new_article.with_slug(slug.clone());
                    attempt += 1;
                }
                Err(DomainError::Conflict(reason)) => {
                    tracing::error!(slug = %slug, %reason, "slug assignment exhausted");
                    return Err(ApplicationError::infrastructure(format!(
                        "could not assign a unique slug after {MAX_SLUG_ATTEMPTS} attempts"
                    )));
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to store generated article");
                    return Err(err.into());
                }
            }
        }
    }
}
