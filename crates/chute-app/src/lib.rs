//! Application service layer - ride planning, config, units

pub mod app;
pub mod config;
pub mod repository;
pub mod units;
