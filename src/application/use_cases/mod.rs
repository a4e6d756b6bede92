pub mod render_dashboard;

pub use render_dashboard::*;
