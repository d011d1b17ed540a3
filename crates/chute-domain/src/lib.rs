//! Domain layer for parasail equipment planning
//!
//! Holds the canopy and tow bar models, the built-in reference tables,
//! and the two pure rule engines that read them.

pub mod catalog;
pub mod model;
pub mod reference;
pub mod repository;
pub mod service;

pub use catalog::Catalog;
