// src/domain/generation/request.rs
use crate::domain::article::ArticleKind;
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_TARGET_WORD_COUNT: u32 = 800;
pub const MAX_TARGET_WORD_COUNT: u32 = 10_000;
pub const MAX_TOPIC_CHARS: usize = 200;
pub const MAX_KEYWORDS: usize = 10;

/// Validated input for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    keywords: Vec<String>,
    target_word_count: u32,
    kind: ArticleKind,
}

impl GenerationRequest {
    pub fn new(
        topic: Option<String>,
        keywords: Vec<String>,
        word_count: Option<i64>,
        kind: Option<String>,
    ) -> DomainResult<Self> {
        let topic = topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DomainError::validation("topic is required"))?;
        if topic.chars().count() > MAX_TOPIC_CHARS {
            return Err(DomainError::validation(format!(
                "topic must be at most {MAX_TOPIC_CHARS} characters"
            )));
        }

        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.len() > MAX_KEYWORDS {
            return Err(DomainError::validation(format!(
                "at most {MAX_KEYWORDS} keywords are allowed"
            )));
        }

        let kind = match kind.as_deref().map(str::trim) {
            None | Some("") => ArticleKind::default(),
            Some(value) => value.parse()?,
        };

        Ok(Self {
            topic,
            keywords,
            target_word_count: normalize_word_count(word_count),
            kind,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Keywords in request order, as stored on the article record.
    pub fn keywords_display(&self) -> String {
        self.keywords.join(", ")
    }

    pub fn target_word_count(&self) -> u32 {
        self.target_word_count
    }

    pub fn kind(&self) -> ArticleKind {
        self.kind
    }
}

fn normalize_word_count(word_count: Option<i64>) -> u32 {
    match word_count {
        Some(count) if count > 0 => {
            u32::try_from(count.min(i64::from(MAX_TARGET_WORD_COUNT))).unwrap_or(MAX_TARGET_WORD_COUNT)
        }
        _ => DEFAULT_TARGET_WORD_COUNT,
    }
}
