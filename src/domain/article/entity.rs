// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleKind, ArticleSlug, ArticleStatus, ArticleTitle,
};
use chrono::{DateTime, Utc};

/// Stored article. Written once by the persistence gateway and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub topic: String,
    /// Caller keywords joined into one display string.
    pub keywords: String,
    pub word_count: u32,
    pub kind: ArticleKind,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub topic: String,
    pub keywords: String,
    pub word_count: u32,
    pub kind: ArticleKind,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewArticle {
    /// Builds an already-published record; `word_count` is taken from the body, not the request.
    pub fn published(
        title: ArticleTitle,
        slug: ArticleSlug,
        body: ArticleBody,
        topic: impl Into<String>,
        keywords: impl Into<String>,
        kind: ArticleKind,
        now: DateTime<Utc>,
    ) -> Self {
        let word_count = body.word_count();
        Self {
            title,
            slug,
            body,
            topic: topic.into(),
            keywords: keywords.into(),
            word_count,
            kind,
            status: ArticleStatus::Published,
            created_at: now,
            published_at: Some(now),
        }
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = slug;
        self
    }
}
