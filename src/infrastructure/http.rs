use std::cell::RefCell;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortController;

use crate::domain::{
    errors::{AppError, FetchResult},
    logging::LogComponent,
    market_data::{DashboardRepository, EventRecord, PricePoint},
};
use crate::{log_debug, log_info};

pub const DEFAULT_PRICES_PATH: &str = "/api/data";
pub const DEFAULT_EVENTS_PATH: &str = "/api/events";

/// Where the dashboard feeds live. An empty `base_url` means same origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub prices_path: String,
    pub events_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            prices_path: DEFAULT_PRICES_PATH.to_string(),
            events_path: DEFAULT_EVENTS_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn prices_url(&self) -> String {
        self.join(&self.prices_path)
    }

    pub fn events_url(&self) -> String {
        self.join(&self.events_path)
    }

    fn join(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// gloo-net backed client for the dashboard API. Plain GETs: no query,
/// headers or body.
///
/// Every request carries its own `AbortSignal`; `cancel` aborts the ones that
/// have not finished reading their body yet.
#[derive(Debug, Default)]
pub struct DashboardHttpClient {
    config: ApiConfig,
    in_flight: RefCell<Vec<AbortController>>,
}

impl DashboardHttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, in_flight: RefCell::new(Vec::new()) }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let controller = AbortController::new()
            .map_err(|e| AppError::NetworkError(format!("GET {url}: abort controller unavailable: {e:?}")))?;
        self.in_flight.borrow_mut().push(controller.clone());

        let result = self.send_and_decode(url, &controller).await;

        self.in_flight.borrow_mut().retain(|pending| pending != &controller);
        result
    }

    async fn send_and_decode<T: DeserializeOwned>(&self, url: &str, controller: &AbortController) -> FetchResult<T> {
        log_debug!(LogComponent::Infrastructure("DashboardHttp"), "GET {}", url);

        let signal = controller.signal();
        let response = Request::get(url)
            .abort_signal(Some(&signal))
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("GET {url}: {e}")))?;

        if !response.ok() {
            return Err(AppError::HttpStatus { status: response.status(), text: response.status_text() });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::DecodeError(format!("GET {url}: {e}")))
    }
}

impl DashboardRepository for DashboardHttpClient {
    async fn fetch_prices(&self) -> FetchResult<Vec<PricePoint>> {
        let url = self.config.prices_url();
        let points: Vec<PricePoint> = self.get_json(&url).await?;
        log_info!(LogComponent::Infrastructure("DashboardHttp"), "{} returned {} price points", url, points.len());
        Ok(points)
    }

    async fn fetch_events(&self) -> FetchResult<Vec<EventRecord>> {
        let url = self.config.events_url();
        let records: Vec<EventRecord> = self.get_json(&url).await?;
        log_info!(LogComponent::Infrastructure("DashboardHttp"), "{} returned {} event records", url, records.len());
        Ok(records)
    }

    fn cancel(&self) {
        let pending: Vec<AbortController> = self.in_flight.borrow_mut().drain(..).collect();
        if !pending.is_empty() {
            log_debug!(LogComponent::Infrastructure("DashboardHttp"), "aborting {} pending requests", pending.len());
        }
        for controller in pending {
            controller.abort();
        }
    }
}
