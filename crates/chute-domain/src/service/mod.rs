//! Domain services

pub mod bar_configurator;
pub mod canopy_selector;

pub use bar_configurator::configure;
pub use canopy_selector::{fitness_score, recommend};
