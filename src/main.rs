use anyhow::{Context, Result};
use reality_filter::application::{
    ports::{
        analysis::{ContentAnalyzer, FactChecker},
        cache::ArticleCache,
        events::EventPublisher,
        ids::ArticleIdGenerator,
        time::Clock,
    },
    services::ApplicationServices,
};
use reality_filter::config::{AnalyzerMode, AppConfig, EventPublisherKind, LogFormat};
use reality_filter::domain::{analytics::AnalyticsStore, article::ArticleRepository};
use reality_filter::infrastructure::{
    analysis::{HeuristicContentAnalyzer, StaticContentAnalyzer, StaticFactChecker},
    cache::{InMemoryArticleCache, RedisArticleCache},
    database,
    events::{LogEventPublisher, RedisEventPublisher},
    redis_pool,
    repositories::{PostgresAnalyticsStore, PostgresArticleRepository},
    system::{RandomArticleIdGenerator, SystemClock},
};
use reality_filter::presentation::http::{routes::build_router_with_options, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format());

    let pool = database::init_pool(config.database_url())
        .await
        .context("failed to connect to postgres")?;
    database::run_migrations(&pool).await?;

    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(PostgresArticleRepository::new(pool.clone()));
    let analytics: Arc<dyn AnalyticsStore> = Arc::new(PostgresAnalyticsStore::new(pool));

    let redis = config
        .redis_url()
        .map(redis_pool::create_pool)
        .transpose()?;

    let cache: Arc<dyn ArticleCache> = match &redis {
        Some(pool) => Arc::new(RedisArticleCache::new(
            pool.clone(),
            config.article_cache_ttl().as_secs(),
        )),
        None => {
            tracing::warn!("REDIS_URL not set; using the in-process article cache");
            Arc::new(InMemoryArticleCache::new(config.article_cache_ttl()))
        }
    };

    let event_publisher: Arc<dyn EventPublisher> = match (config.event_publisher(), &redis) {
        (EventPublisherKind::Redis, Some(pool)) => Arc::new(RedisEventPublisher::new(pool.clone())),
        (EventPublisherKind::Redis, None) => anyhow::bail!("redis event publisher needs REDIS_URL"),
        (EventPublisherKind::Log, _) => Arc::new(LogEventPublisher),
    };

    let content_analyzer: Arc<dyn ContentAnalyzer> = match config.analyzer_mode() {
        AnalyzerMode::Static => Arc::new(StaticContentAnalyzer),
        AnalyzerMode::Heuristic => Arc::new(HeuristicContentAnalyzer::new()),
    };
    let fact_checker: Arc<dyn FactChecker> = Arc::new(
        StaticFactChecker::new(config.default_source_reputation())
            .with_reputations(config.source_reputations().iter().cloned()),
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn ArticleIdGenerator> = Arc::new(RandomArticleIdGenerator);

    let services = ApplicationServices::new(
        article_repo,
        cache,
        content_analyzer,
        fact_checker,
        event_publisher,
        analytics,
        clock,
        ids,
    );

    let app = build_router_with_options(
        HttpState::new(services),
        config.allowed_origins(),
        config.rate_limit_enabled(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        analyzer = ?config.analyzer_mode(),
        events = ?config.event_publisher(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(env_filter));
    let result = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    if result.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
