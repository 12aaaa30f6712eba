// src/services/mod.rs
pub mod professor_service;
pub mod user_service;
