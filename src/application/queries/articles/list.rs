use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, OffsetPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleKind,
};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub kind: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<OffsetPage<ArticleSummaryDto>> {
        let (kind, limit, offset) = self.normalize_listing(&query)?;

        let (records, total) = self.read_repo.list_page(kind, limit, offset).await?;

        let items = records
            .into_iter()
            .map(|article| ArticleSummaryDto::from_article(article, EXCERPT_CHARS))
            .collect();
        Ok(OffsetPage::new(items, total, limit, offset))
    }

    /// Out-of-range paging values are clamped rather than rejected.
    pub(super) fn normalize_listing(
        &self,
        query: &ListArticlesQuery,
    ) -> ApplicationResult<(Option<ArticleKind>, u32, u64)> {
        let kind = match query.kind.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(
                value
                    .parse::<ArticleKind>()
                    .map_err(ApplicationError::from_input)?,
            ),
        };

        let limit = match query.limit {
            Some(limit) if limit > 0 => {
                u32::try_from(limit.min(i64::from(MAX_LIMIT))).unwrap_or(MAX_LIMIT)
            }
            _ => DEFAULT_LIMIT,
        };

        let offset = query
            .offset
            .map(|offset| u64::try_from(offset.max(0)).unwrap_or(0))
            .unwrap_or(0);

        Ok((kind, limit, offset))
    }
}
