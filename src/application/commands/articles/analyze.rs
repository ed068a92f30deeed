// src/application/commands/articles/analyze.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AnalysisDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleEventKind, ArticleId, ArticleStatus,
        services::{credibility_score, derive_metadata, normalize_sentiment},
    },
};
use tracing::{debug, info, warn};

/// Detector identity recorded on flags raised by the content analyzer.
pub const BIAS_DETECTOR: &str = "bias_detector";
/// Detector identity recorded on flags raised by the fact checker.
pub const FACT_CHECKER: &str = "fact_checker";

pub struct AnalyzeArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn analyze_article(
        &self,
        command: AnalyzeArticleCommand,
    ) -> ApplicationResult<AnalysisDto> {
        let id = ArticleId::parse(&command.id)?;
        let mut article = self.load(id).await?;
        self.run_analysis(&mut article).await?;
        Ok(AnalysisDto::from(&article))
    }

    /// Runs every analysis step in order, then persists and broadcasts the
    /// result. Any analyzer failure aborts before the article is written.
    pub(super) async fn run_analysis(&self, article: &mut Article) -> ApplicationResult<()> {
        let content = article.content.as_str();

        let sentiment = self
            .content_analyzer
            .analyze_sentiment(content)
            .await
            .map_err(|err| ApplicationError::step_failed("analyze sentiment", err))?;
        let sentiment = normalize_sentiment(sentiment);

        let entities = self
            .content_analyzer
            .extract_entities(content)
            .await
            .map_err(|err| ApplicationError::step_failed("extract entities", err))?;

        let bias_issues = self
            .content_analyzer
            .detect_bias(content)
            .await
            .map_err(|err| ApplicationError::step_failed("detect bias", err))?;

        let fact_issues = self
            .fact_checker
            .check_facts(article)
            .await
            .map_err(|err| ApplicationError::step_failed("check facts", err))?;

        let reputation = self
            .fact_checker
            .source_reputation(article.source.as_str())
            .await
            .map_err(|err| ApplicationError::step_failed("get source reputation", err))?;

        let language = self
            .content_analyzer
            .detect_language(content)
            .await
            .map_err(|err| ApplicationError::step_failed("detect language", err))?;

        debug!(
            article_id = %article.id,
            sentiment,
            reputation,
            bias_issues = bias_issues.len(),
            fact_issues = fact_issues.len(),
            "analysis steps completed"
        );

        let now = self.clock.now();
        let metadata = derive_metadata(article.content.as_str(), entities, sentiment, language);
        article.update_metadata(metadata, now);

        for issue in bias_issues {
            article.add_flag(issue.flag_type, issue.confidence, issue.details, BIAS_DETECTOR, now);
        }
        for issue in fact_issues {
            article.add_flag(issue.flag_type, issue.confidence, issue.details, FACT_CHECKER, now);
        }

        let score = credibility_score(reputation, sentiment, article.flags.len());
        article.update_score(score, now);

        let status = if article.is_flagged() {
            ArticleStatus::Flagged
        } else {
            ArticleStatus::Analyzed
        };
        article.update_status(status, now);

        self.repository.update(article).await?;
        info!(
            article_id = %article.id,
            score = article.score,
            flags = article.flags.len(),
            status = %article.status,
            "article analyzed"
        );

        if let Err(err) = self.cache.set(article).await {
            warn!(error = %err, article_id = %article.id, "failed to update cache");
        }

        if let Err(err) = self.event_publisher.publish_article_analyzed(article).await {
            warn!(error = %err, article_id = %article.id, "failed to publish article analyzed event");
        }
        self.record(ArticleEventKind::ArticleAnalyzed, article).await;

        if article.status == ArticleStatus::Flagged {
            if let Err(err) = self.event_publisher.publish_article_flagged(article).await {
                warn!(error = %err, article_id = %article.id, "failed to publish article flagged event");
            }
            self.record(ArticleEventKind::ArticleFlagged, article).await;
        }

        Ok(())
    }
}
