//! Application service layer - registration, listing, config

pub mod app;
pub mod config;
pub mod repository;
