// tests/support/mocks/repos.rs
use async_trait::async_trait;
use reality_filter::domain::article::{Article, ArticleId, ArticleRepository, ArticleStatus};
use reality_filter::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// インメモリの記事リポジトリ
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<ArticleId, Article>>,
    updates: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, article: Article) {
        self.inner.lock().unwrap().insert(article.id, article);
    }

    pub fn get(&self, id: ArticleId) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Number of successful `update` calls.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn save(&self, article: &Article) -> DomainResult<()> {
        self.insert(article.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id))
    }

    async fn find_flagged(&self, limit: u32, offset: u32) -> DomainResult<Vec<Article>> {
        let mut flagged: Vec<Article> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|article| article.status == ArticleStatus::Flagged)
            .cloned()
            .collect();
        flagged.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(flagged
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn update(&self, article: &Article) -> DomainResult<()> {
        let mut guard = self.inner.lock().unwrap();
        match guard.get_mut(&article.id) {
            Some(existing) => {
                *existing = article.clone();
                self.updates.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            None => Err(DomainError::article_not_found()),
        }
    }
}
