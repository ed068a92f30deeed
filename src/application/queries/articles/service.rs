use std::sync::Arc;

use crate::application::ports::cache::ArticleCache;
use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repository: Arc<dyn ArticleRepository>,
    pub(super) cache: Arc<dyn ArticleCache>,
}

impl ArticleQueryService {
    pub fn new(repository: Arc<dyn ArticleRepository>, cache: Arc<dyn ArticleCache>) -> Self {
        Self { repository, cache }
    }
}
