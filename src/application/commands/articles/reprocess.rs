use super::ArticleCommandService;
use crate::{
    application::{dto::AnalysisDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ReprocessArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Discards earlier results and analyzes the stored article again.
    pub async fn reprocess_article(
        &self,
        command: ReprocessArticleCommand,
    ) -> ApplicationResult<AnalysisDto> {
        let id = ArticleId::parse(&command.id)?;
        let mut article = self.load(id).await?;

        article.reset_analysis(self.clock.now());
        self.run_analysis(&mut article).await?;
        Ok(AnalysisDto::from(&article))
    }
}
