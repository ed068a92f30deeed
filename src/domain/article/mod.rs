pub mod entity;
pub mod events;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleMetadata, Entity, Flag, NewArticle};
pub use events::{ArticleEvent, ArticleEventKind};
pub use repository::ArticleRepository;
pub use value_objects::{
    ArticleAuthor, ArticleContent, ArticleId, ArticleSource, ArticleStatus, ArticleTitle,
    EntityType, FlagType, normalize_tags,
};
