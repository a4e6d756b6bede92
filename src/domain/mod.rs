//! Domain layer: the two market feeds, the view state they populate,
//! the shared error type and the logging abstraction.

pub mod errors;
pub mod logging;
pub mod market_data;
pub mod state;
