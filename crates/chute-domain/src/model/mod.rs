//! Domain model types

pub mod canopy;
pub mod passenger;
pub mod tow_bar;

pub use canopy::{CanopyRecommendation, CanopySpec, VentMode};
pub use passenger::{PassengerRole, PassengerStrapAssignment};
pub use tow_bar::{BarPositionRule, BarSetupResult, StrapPair, TowBarSpec};
