use super::map_sqlx;
use crate::domain::analytics::{AnalyticsStore, TopicCount};
use crate::domain::article::{ArticleEvent, ArticleEventKind, FlagType};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, types::Json};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Clone)]
pub struct PostgresAnalyticsStore {
    pool: PgPool,
}

impl PostgresAnalyticsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

#[async_trait]
impl AnalyticsStore for PostgresAnalyticsStore {
    async fn record_event(&self, event: &ArticleEvent) -> DomainResult<()> {
        let flag_types: Vec<&'static str> = event.flag_types.iter().map(FlagType::as_str).collect();

        sqlx::query(
            "INSERT INTO article_events (article_id, kind, source, status, score, flag_types, tags, occurred_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(event.article_id.as_uuid())
        .bind(event.kind.as_str())
        .bind(&event.source)
        .bind(event.status.as_str())
        .bind(event.score)
        .bind(Json(flag_types))
        .bind(Json(&event.tags))
        .bind(event.at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn source_stats(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> DomainResult<BTreeMap<String, u64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT source, COUNT(*) FROM article_events
             WHERE kind = $1 AND ($2::timestamptz IS NULL OR occurred_at >= $2)
             GROUP BY source",
        )
        .bind(ArticleEventKind::ArticleCreated.as_str())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(source, count)| (source, to_count(count)))
            .collect())
    }

    async fn flag_stats(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> DomainResult<BTreeMap<FlagType, u64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT f.flag_type, COUNT(*) FROM article_events e
             CROSS JOIN LATERAL jsonb_array_elements_text(e.flag_types) AS f(flag_type)
             WHERE e.kind = $1 AND ($2::timestamptz IS NULL OR e.occurred_at >= $2)
             GROUP BY f.flag_type",
        )
        .bind(ArticleEventKind::ArticleAnalyzed.as_str())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut stats = BTreeMap::new();
        for (name, count) in rows {
            match name.parse::<FlagType>() {
                Ok(flag) => {
                    *stats.entry(flag).or_insert(0) += to_count(count);
                }
                Err(_) => warn!(flag_type = %name, "ignoring unknown flag type in analytics"),
            }
        }
        Ok(stats)
    }

    async fn trending_topics(
        &self,
        since: Option<DateTime<Utc>>,
        limit: u32,
    ) -> DomainResult<Vec<TopicCount>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT t.tag, COUNT(*) AS mentions FROM article_events e
             CROSS JOIN LATERAL jsonb_array_elements_text(e.tags) AS t(tag)
             WHERE e.kind = $1 AND ($2::timestamptz IS NULL OR e.occurred_at >= $2)
             GROUP BY t.tag
             ORDER BY mentions DESC, t.tag ASC
             LIMIT $3",
        )
        .bind(ArticleEventKind::ArticleCreated.as_str())
        .bind(since)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(topic, count)| TopicCount {
                topic,
                count: to_count(count),
            })
            .collect())
    }
}
