// src/services/mod.rs
pub mod provider;
pub mod relay;
