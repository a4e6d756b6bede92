//! Application layer: the view controller and the render contract.

pub mod coordinator;
pub mod use_cases;

pub use coordinator::{DashboardController, StateCell};
