use strum::{AsRefStr, Display};

use crate::domain::errors::{AppError, FetchResult};
use crate::domain::market_data::{EventRecord, PricePoint};

/// Whether the page may show data yet.
///
/// `Loaded` is terminal: nothing moves the view back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
}

/// Outcome of one feed request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedStatus {
    #[default]
    Pending,
    Ready,
    Failed(AppError),
}

impl FeedStatus {
    pub fn error(&self) -> Option<&AppError> {
        match self {
            FeedStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Everything the dashboard view owns for one page load.
///
/// Each feed has exactly one writer (`apply_prices` / `apply_events`).
/// Only a successful price response ends `Loading`; events arriving first
/// are stored but stay hidden until then.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    prices: Vec<PricePoint>,
    events: Vec<EventRecord>,
    phase: LoadPhase,
    price_feed: FeedStatus,
    event_feed: FeedStatus,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_prices(&mut self, result: FetchResult<Vec<PricePoint>>) {
        match result {
            Ok(points) => {
                self.prices = points;
                self.price_feed = FeedStatus::Ready;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => self.price_feed = FeedStatus::Failed(err),
        }
    }

    pub fn apply_events(&mut self, result: FetchResult<Vec<EventRecord>>) {
        match result {
            Ok(records) => {
                self.events = records;
                self.event_feed = FeedStatus::Ready;
            }
            Err(err) => self.event_feed = FeedStatus::Failed(err),
        }
    }

    pub fn prices(&self) -> &[PricePoint] {
        &self.prices
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn price_feed(&self) -> &FeedStatus {
        &self.price_feed
    }

    pub fn event_feed(&self) -> &FeedStatus {
        &self.event_feed
    }
}
