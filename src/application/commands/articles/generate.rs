// src/application/commands/articles/generate.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::GeneratedArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::generation::GenerationRequest,
};

/// Raw caller input; validated into a [`GenerationRequest`] before anything is generated.
#[derive(Debug, Clone, Default)]
pub struct GenerateArticleCommand {
    pub topic: Option<String>,
    pub keywords: Vec<String>,
    pub word_count: Option<i64>,
    pub article_kind: Option<String>,
}

impl GenerateArticleCommand {
    pub fn builder() -> GenerateArticleCommandBuilder {
        GenerateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct GenerateArticleCommandBuilder {
    topic: Option<String>,
    keywords: Vec<String>,
    word_count: Option<i64>,
    article_kind: Option<String>,
}

impl GenerateArticleCommandBuilder {
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn word_count(mut self, word_count: i64) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn article_kind(mut self, kind: impl Into<String>) -> Self {
        self.article_kind = Some(kind.into());
        self
    }

    pub fn build(self) -> GenerateArticleCommand {
        GenerateArticleCommand {
            topic: self.topic,
            keywords: self.keywords,
            word_count: self.word_count,
            article_kind: self.article_kind,
        }
    }
}

impl TryFrom<GenerateArticleCommand> for GenerationRequest {
    type Error = ApplicationError;

    fn try_from(command: GenerateArticleCommand) -> Result<Self, Self::Error> {
        GenerationRequest::new(
            command.topic,
            command.keywords,
            command.word_count,
            command.article_kind,
        )
        .map_err(ApplicationError::from_input)
    }
}

impl ArticleCommandService {
    /// Validates, generates, and stores one article.
    ///
    /// Invalid input is rejected before any generation attempt. Provider
    /// failures never surface here; only storage faults do.
    pub async fn generate_article(
        &self,
        command: GenerateArticleCommand,
    ) -> ApplicationResult<GeneratedArticleDto> {
        let request = GenerationRequest::try_from(command)?;

        let content = self.orchestrator.orchestrate(&request).await;
        let article = self.persist(content, &request).await?;

        tracing::info!(
            article_id = %article.id,
            slug = %article.slug,
            word_count = article.word_count,
            mode = self.orchestrator.mode().as_str(),
            "article generated"
        );
        Ok(article.into())
    }
}
