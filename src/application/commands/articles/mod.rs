// src/application/commands/articles/mod.rs
mod generate;
mod persist;
mod service;

pub use generate::{GenerateArticleCommand, GenerateArticleCommandBuilder};
pub use persist::MAX_SLUG_ATTEMPTS;
pub use service::ArticleCommandService;
