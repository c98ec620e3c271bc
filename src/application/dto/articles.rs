use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Creation response: deliberately a subset of the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub word_count: u32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Article> for GeneratedArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            word_count: article.word_count,
            created_at: article.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Markdown body.
    pub content: String,
    pub topic: String,
    pub keywords: String,
    pub word_count: u32,
    pub article_kind: String,
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.body.into_inner(),
            topic: article.topic,
            keywords: article.keywords,
            word_count: article.word_count,
            article_kind: article.kind.as_str().to_string(),
            status: article.status.as_str().to_string(),
            created_at: article.created_at,
            published_at: article.published_at,
        }
    }
}

/// Listing entry carrying an excerpt instead of the full body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub topic: String,
    pub keywords: String,
    pub word_count: u32,
    pub article_kind: String,
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleSummaryDto {
    pub fn from_article(article: Article, excerpt_chars: usize) -> Self {
        Self {
            id: article.id.into(),
            excerpt: article.body.excerpt(excerpt_chars),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            topic: article.topic,
            keywords: article.keywords,
            word_count: article.word_count,
            article_kind: article.kind.as_str().to_string(),
            status: article.status.as_str().to_string(),
            created_at: article.created_at,
            published_at: article.published_at,
        }
    }
}
