// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::GenerateArticleCommand,
    dto::{ArticleDto, ArticleSummaryDto, GeneratedArticleDto, OffsetPage},
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArticleRequest {
    /// Subject of the article. Required.
    #[serde(default)]
    #[schema(example = "Artificial Intelligence")]
    pub topic: Option<String>,
    /// Keywords as a list or a single comma-separated string.
    #[serde(default, deserialize_with = "deserialize_keywords")]
    #[schema(value_type = Vec<String>, example = json!(["machine learning", "automation"]))]
    pub keywords: Vec<String>,
    /// Target length; defaults to 800 when absent or not positive.
    #[serde(default)]
    #[schema(example = 800)]
    pub word_count: Option<i64>,
    /// `custom` (default) or `quick`.
    #[serde(default)]
    #[schema(example = "custom")]
    pub article_kind: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordsInput {
    List(Vec<String>),
    Csv(String),
}

fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<KeywordsInput>::deserialize(deserializer)?;
    Ok(match input {
        None => Vec::new(),
        Some(KeywordsInput::List(items)) => items,
        Some(KeywordsInput::Csv(raw)) => raw.split(',').map(str::to_string).collect(),
    })
}

impl From<GenerateArticleRequest> for GenerateArticleCommand {
    fn from(request: GenerateArticleRequest) -> Self {
        Self {
            topic: request.topic,
            keywords: request.keywords,
            word_count: request.word_count,
            article_kind: request.article_kind,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Filter by article kind.
    pub kind: Option<String>,
    /// Page size; clamped to 1..=100, default 20.
    pub limit: Option<i64>,
    /// Rows to skip; negative values are treated as 0.
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub items: Vec<ArticleSummaryDto>,
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub has_more: bool,
}

impl From<OffsetPage<ArticleSummaryDto>> for ArticleListResponse {
    fn from(page: OffsetPage<ArticleSummaryDto>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
            has_more: page.has_more,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/generate",
    request_body = GenerateArticleRequest,
    responses(
        (status = 201, description = "Article generated and stored.", body = GeneratedArticleDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn generate_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<GenerateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<GeneratedArticleDto>)> {
    let Json(payload) = payload.map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

    state
        .services
        .article_commands
        .generate_article(payload.into())
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Newest-first page of article summaries.", body = ArticleListResponse),
        (status = 400, description = "Invalid filter.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> HttpResult<Json<ArticleListResponse>> {
    let Query(params) = params.map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            kind: params.kind,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Full article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Path(id) = id.map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Full article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
