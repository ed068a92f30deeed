mod analysis;
mod flagged;
mod get_by_id;
mod service;

pub use analysis::GetAnalysisResultQuery;
pub use flagged::{DEFAULT_FLAGGED_LIMIT, ListFlaggedArticlesQuery, MAX_FLAGGED_LIMIT};
pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
