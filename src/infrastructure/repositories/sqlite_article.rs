use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleKind, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str = "id, title, slug, body, topic, keywords, word_count, article_kind, status, created_at, published_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    topic: String,
    keywords: String,
    word_count: i64,
    article_kind: String,
    status: String,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body)?,
            topic: row.topic,
            keywords: row.keywords,
            word_count: u32::try_from(row.word_count)
                .map_err(|_| DomainError::persistence("stored word_count out of range"))?,
            kind: row.article_kind.parse::<ArticleKind>()?,
            status: row.status.parse::<ArticleStatus>()?,
            created_at: row.created_at,
            published_at: row.published_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            body,
            topic,
            keywords,
            word_count,
            kind,
            status,
            created_at,
            published_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, slug, body, topic, keywords, word_count, article_kind, status, created_at, published_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(body.as_str())
            .bind(topic)
            .bind(keywords)
            .bind(i64::from(word_count))
            .bind(kind.as_str())
            .bind(status.as_str())
            .bind(created_at)
            .bind(published_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        kind: Option<ArticleKind>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let kind = kind.map(|k| k.as_str());
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Sqlite>, kind: Option<&'a str>) {
            if let Some(kind) = kind {
                builder.push(" WHERE article_kind = ");
                builder.push_bind(kind);
            }
        }

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        apply_conditions(&mut list_builder, kind);
        list_builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        list_builder.push_bind(i64::from(limit));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles");
        apply_conditions(&mut count_builder, kind);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, u64::try_from(total).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database;
    use chrono::{Duration, TimeZone};

    async fn repos() -> (SqliteArticleWriteRepository, SqliteArticleReadRepository) {
        let pool = database::init_pool("sqlite::memory:").await.unwrap();
        database::run_migrations(&pool).await.unwrap();
        (
            SqliteArticleWriteRepository::new(pool.clone()),
            SqliteArticleReadRepository::new(pool),
        )
    }

    fn new_article(slug: &str, kind: ArticleKind, at: DateTime<Utc>) -> NewArticle {
        NewArticle::published(
            ArticleTitle::new("Edge AI").unwrap(),
            ArticleSlug::new(slug).unwrap(),
            ArticleBody::new("# Edge AI\n\n## Introduction\n\nSmall models everywhere.").unwrap(),
            "Edge AI",
            "inference, devices",
            kind,
            at,
        )
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let (write, read) = repos().await;
        let created = write
            .insert(new_article("edge-ai-1", ArticleKind::Quick, base_time()))
            .await
            .unwrap();

        let found = read.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, created.title);
        assert_eq!(found.body, created.body);
        assert_eq!(found.topic, "Edge AI");
        assert_eq!(found.keywords, "inference, devices");
        assert_eq!(found.word_count, created.word_count);
        assert_eq!(found.kind, ArticleKind::Quick);
        assert_eq!(found.status, ArticleStatus::Published);
        assert_eq!(found.published_at, Some(base_time()));

        let by_slug = read
            .find_by_slug(&ArticleSlug::new("edge-ai-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_slug.id, created.id);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let (write, _) = repos().await;
        write
            .insert(new_article("edge-ai-1", ArticleKind::Custom, base_time()))
            .await
            .unwrap();
        let err = write
            .insert(new_article("edge-ai-1", ArticleKind::Custom, base_time()))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn missing_rows_are_none() {
        let (_, read) = repos().await;
        assert!(read.find_by_id(ArticleId::new(99).unwrap()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_page_orders_newest_first_and_filters_kind() {
        let (write, read) = repos().await;
        for (i, kind) in [ArticleKind::Custom, ArticleKind::Quick, ArticleKind::Custom]
            .into_iter()
            .enumerate()
        {
            let at = base_time() + Duration::minutes(i as i64);
            write
                .insert(new_article(&format!("edge-ai-{i}"), kind, at))
                .await
                .unwrap();
        }

        let (all, total) = read.list_page(None, 10, 0).await.unwrap();
        assert_eq!(total, 3);
        let slugs: Vec<_> = all.iter().map(|a| a.slug.as_str().to_string()).collect();
        assert_eq!(slugs, ["edge-ai-2", "edge-ai-1", "edge-ai-0"]);

        let (custom, custom_total) = read
            .list_page(Some(ArticleKind::Custom), 1, 1)
            .await
            .unwrap();
        assert_eq!(custom_total, 2);
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].slug.as_str(), "edge-ai-0");
    }
}
