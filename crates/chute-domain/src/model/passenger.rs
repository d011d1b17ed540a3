//! Passenger placement types

use serde::{Deserialize, Serialize};

use super::tow_bar::StrapPair;

/// Seat a passenger takes on the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerRole {
    Heavy,
    Middle,
    Light,
}

impl PassengerRole {
    /// Label shown next to the passenger
    pub fn label(&self) -> &'static str {
        match self {
            PassengerRole::Heavy => "Heaviest",
            PassengerRole::Middle => "Middle",
            PassengerRole::Light => "Lightest",
        }
    }
}

/// Strap assignment for one passenger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerStrapAssignment {
    /// Position of the passenger in the caller's weight list
    pub passenger_index: usize,
    /// Weight in lbs
    pub weight: f64,
    pub role: PassengerRole,
    pub straps: StrapPair,
}
