//! Built-in reference tables

pub mod bar_specs;
pub mod canopy_specs;

pub use bar_specs::{get_bar_spec, BAR_SPECS};
pub use canopy_specs::{get_canopy_spec, CANOPY_SPECS};
