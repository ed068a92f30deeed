// src/application/ports/mod.rs
pub mod analysis;
pub mod cache;
pub mod events;
pub mod ids;
pub mod time;

