//! Application services

pub mod planning_service;

pub use planning_service::{plan_ride, BarStatus, PlanOptions, RidePlan};
