pub mod analysis;
pub mod cache;
pub mod database;
pub mod events;
pub mod redis_pool;
pub mod repositories;
pub mod system;
