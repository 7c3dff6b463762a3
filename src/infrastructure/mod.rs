// src/infrastructure/mod.rs
pub mod dynamodb;
pub mod time;
