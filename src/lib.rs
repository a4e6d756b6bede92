use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

/// Browser entry point: wire up logging and mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    init_logger(Box::new(console_logger));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    crate::log_info!(LogComponent::Presentation("Initialize"), "🛢️ mounting oil price dashboard");

    mount_to_body(|| view! { <App /> });
}
