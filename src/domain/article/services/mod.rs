// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Domain service producing timestamp-suffixed slugs for articles.
///
/// The slug is the normalized title followed by `-<milliseconds since epoch>`.
/// Two slugs only collide when the same normalized title is assigned in the
/// same millisecond; callers that hit a storage conflict ask for
/// [`ArticleSlugService::next_after`] to get a strictly larger suffix.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    /// Normalized title without the timestamp suffix.
    /// Empty when the title has no ASCII letters or digits.
    pub fn base_slug(&self, title: &ArticleTitle) -> String {
        self.generator.slugify(title.as_str())
    }

    pub fn generate(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        self.next_after(title, None)
    }

    /// Same as [`generate`](Self::generate) but the suffix is guaranteed to be
    /// greater than `previous_millis`.
    pub fn next_after(
        &self,
        title: &ArticleTitle,
        previous_millis: Option<i64>,
    ) -> DomainResult<ArticleSlug> {
        let now = self.clock.now().timestamp_millis();
        let millis = match previous_millis {
            Some(previous) if now <= previous => previous + 1,
            _ => now,
        };
        ArticleSlug::new(format!("{}-{}", self.base_slug(title), millis))
    }
}
