// tests/support/mocks/repos.rs
use async_trait::async_trait;
use fude_core::domain::article::{
    Article, ArticleId, ArticleKind, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
    NewArticle,
};
use fude_core::domain::errors::{DomainError, DomainResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Every write fails with a storage fault.
pub struct FailingWriteRepo;

#[async_trait]
impl ArticleWriteRepository for FailingWriteRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence(
            "database is locked (/var/lib/fude/fude.db)".into(),
        ))
    }
}

/// Every read fails with a storage fault.
pub struct FailingReadRepo;

#[async_trait]
impl ArticleReadRepository for FailingReadRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("disk I/O error".into()))
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("disk I/O error".into()))
    }

    async fn list_page(
        &self,
        _kind: Option<ArticleKind>,
        _limit: u32,
        _offset: u64,
    ) -> DomainResult<(Vec<Article>, u64)> {
        Err(DomainError::Persistence("disk I/O error".into()))
    }
}

/// Reports a slug conflict on every insert and records the attempts.
#[derive(Default)]
pub struct ConflictingWriteRepo {
    attempts: AtomicUsize,
    slugs: std::sync::Mutex<Vec<String>>,
}

impl ConflictingWriteRepo {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn slugs(&self) -> Vec<String> {
        self.slugs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for ConflictingWriteRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.slugs
            .lock()
            .unwrap()
            .push(article.slug.as_str().to_string());
        Err(DomainError::Conflict("slug already exists".into()))
    }
}

/// Reports a slug conflict for the first `conflicts` inserts, then delegates.
pub struct EventuallyFreeWriteRepo {
    conflicts: usize,
    attempts: AtomicUsize,
    inner: std::sync::Arc<dyn ArticleWriteRepository>,
}

impl EventuallyFreeWriteRepo {
    pub fn new(conflicts: usize, inner: std::sync::Arc<dyn ArticleWriteRepository>) -> Self {
        Self {
            conflicts,
            attempts: AtomicUsize::new(0),
            inner,
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleWriteRepository for EventuallyFreeWriteRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let seen = self.attempts.fetch_add(1, Ordering::SeqCst);
        if seen < self.conflicts {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        self.inner.insert(article).await
    }
}
