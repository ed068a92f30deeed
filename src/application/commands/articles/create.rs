// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::CreatedArticleDto, error::ApplicationResult},
    domain::article::{
        Article, ArticleAuthor, ArticleContent, ArticleEventKind, ArticleSource, ArticleTitle,
        NewArticle, normalize_tags,
    },
};
use tracing::info;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub source: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    source: Option<String>,
    author: Option<String>,
    tags: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            source: self.source.ok_or("source is required")?,
            author: self.author.ok_or("author is required")?,
            tags: self.tags,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedArticleDto> {
        let new_article = NewArticle {
            title: ArticleTitle::new(command.title)?,
            content: ArticleContent::new(command.content)?,
            source: ArticleSource::new(command.source)?,
            author: ArticleAuthor::new(command.author)?,
            tags: normalize_tags(&command.tags),
        };

        let article = Article::submit(self.ids.next_id(), new_article, self.clock.now());
        self.repository.save(&article).await?;
        info!(article_id = %article.id, source = %article.source, "article submitted");

        self.record(ArticleEventKind::ArticleCreated, &article).await;
        Ok(CreatedArticleDto::from(&article))
    }
}
