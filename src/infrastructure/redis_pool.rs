// src/infrastructure/redis_pool.rs
use crate::application::error::ApplicationError;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};

/// Create a connection pool from a redis URL (e.g. redis://:password@host:6379/0).
pub fn create_pool(url: &str) -> Result<Pool, ApplicationError> {
    DeadpoolConfig::from_url(url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

pub(crate) async fn connection(pool: &Pool) -> Result<Connection, ApplicationError> {
    pool.get()
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

pub(crate) fn redis_error(err: redis::RedisError) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}
