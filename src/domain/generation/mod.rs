// src/domain/generation/mod.rs
mod content;
mod request;
mod templates;

pub use content::{GeneratedContent, extract_title, is_heading_line};
pub use request::{
    DEFAULT_TARGET_WORD_COUNT, GenerationRequest, MAX_KEYWORDS, MAX_TARGET_WORD_COUNT,
    MAX_TOPIC_CHARS,
};
pub use templates::TitleTemplate;
