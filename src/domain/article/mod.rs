pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleId, ArticleKind, ArticleSlug, ArticleStatus, ArticleTitle,
};
