// tests/support/mocks/analysis.rs
use async_trait::async_trait;
use reality_filter::application::ApplicationResult;
use reality_filter::application::error::ApplicationError;
use reality_filter::application::ports::analysis::{ContentAnalyzer, DetectedIssue, FactChecker};
use reality_filter::domain::article::{Article, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerStep {
    Sentiment,
    Entities,
    Bias,
    Language,
}

/// Returns canned results; optionally fails at one step.
#[derive(Debug, Clone)]
pub struct ScriptedContentAnalyzer {
    pub sentiment: f64,
    pub entities: Vec<Entity>,
    pub issues: Vec<DetectedIssue>,
    pub language: String,
    pub fail_at: Option<AnalyzerStep>,
}

impl Default for ScriptedContentAnalyzer {
    fn default() -> Self {
        Self {
            sentiment: 0.5,
            entities: Vec::new(),
            issues: Vec::new(),
            language: "en".into(),
            fail_at: None,
        }
    }
}

impl ScriptedContentAnalyzer {
    pub fn with_issues(issues: Vec<DetectedIssue>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    pub fn failing_at(step: AnalyzerStep) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::default()
        }
    }

    fn check(&self, step: AnalyzerStep) -> ApplicationResult<()> {
        if self.fail_at == Some(step) {
            Err(ApplicationError::infrastructure("analyzer backend timed out"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentAnalyzer for ScriptedContentAnalyzer {
    async fn analyze_sentiment(&self, _text: &str) -> ApplicationResult<f64> {
        self.check(AnalyzerStep::Sentiment)?;
        Ok(self.sentiment)
    }

    async fn extract_entities(&self, _text: &str) -> ApplicationResult<Vec<Entity>> {
        self.check(AnalyzerStep::Entities)?;
        Ok(self.entities.clone())
    }

    async fn detect_bias(&self, _text: &str) -> ApplicationResult<Vec<DetectedIssue>> {
        self.check(AnalyzerStep::Bias)?;
        Ok(self.issues.clone())
    }

    async fn detect_language(&self, _text: &str) -> ApplicationResult<String> {
        self.check(AnalyzerStep::Language)?;
        Ok(self.language.clone())
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedFactChecker {
    pub reputation: f64,
    pub issues: Vec<DetectedIssue>,
    pub fail: bool,
    pub fail_reputation: bool,
}

impl Default for ScriptedFactChecker {
    fn default() -> Self {
        Self {
            reputation: 0.8,
            issues: Vec::new(),
            fail: false,
            fail_reputation: false,
        }
    }
}

#[async_trait]
impl FactChecker for ScriptedFactChecker {
    async fn check_facts(&self, _article: &Article) -> ApplicationResult<Vec<DetectedIssue>> {
        if self.fail {
            return Err(ApplicationError::infrastructure("fact check service down"));
        }
        Ok(self.issues.clone())
    }

    async fn source_reputation(&self, _source: &str) -> ApplicationResult<f64> {
        if self.fail_reputation {
            return Err(ApplicationError::infrastructure("reputation lookup timed out"));
        }
        Ok(self.reputation)
    }
}
