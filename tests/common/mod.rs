#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use oil_price_dashboard::application::DashboardController;
use oil_price_dashboard::domain::errors::{AppError, FetchResult};
use oil_price_dashboard::domain::market_data::{DashboardRepository, EventRecord, PricePoint};
use oil_price_dashboard::domain::state::DashboardState;

pub type SharedState = Rc<RefCell<DashboardState>>;

/// Repository whose responses are released by the test, in whatever order it likes.
pub struct ScriptedRepository {
    prices: RefCell<Option<oneshot::Receiver<FetchResult<Vec<PricePoint>>>>>,
    events: RefCell<Option<oneshot::Receiver<FetchResult<Vec<EventRecord>>>>>,
    pub price_calls: Cell<usize>,
    pub event_calls: Cell<usize>,
    pub cancel_calls: Cell<usize>,
}

pub struct Responders {
    pub prices: oneshot::Sender<FetchResult<Vec<PricePoint>>>,
    pub events: oneshot::Sender<FetchResult<Vec<EventRecord>>>,
}

impl ScriptedRepository {
    pub fn new() -> (Rc<Self>, Responders) {
        let (prices_tx, prices_rx) = oneshot::channel();
        let (events_tx, events_rx) = oneshot::channel();
        let repository = Rc::new(Self {
            prices: RefCell::new(Some(prices_rx)),
            events: RefCell::new(Some(events_rx)),
            price_calls: Cell::new(0),
            event_calls: Cell::new(0),
            cancel_calls: Cell::new(0),
        });
        (repository, Responders { prices: prices_tx, events: events_tx })
    }
}

fn hung_up() -> AppError {
    AppError::NetworkError("responder dropped".to_string())
}

impl DashboardRepository for ScriptedRepository {
    async fn fetch_prices(&self) -> FetchResult<Vec<PricePoint>> {
        self.price_calls.set(self.price_calls.get() + 1);
        let receiver = self.prices.borrow_mut().take();
        match receiver {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(hung_up())),
            None => Err(hung_up()),
        }
    }

    async fn fetch_events(&self) -> FetchResult<Vec<EventRecord>> {
        self.event_calls.set(self.event_calls.get() + 1);
        let receiver = self.events.borrow_mut().take();
        match receiver {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(hung_up())),
            None => Err(hung_up()),
        }
    }

    fn cancel(&self) {
        self.cancel_calls.set(self.cancel_calls.get() + 1);
    }
}

pub struct Harness {
    pub pool: LocalPool,
    pub repository: Rc<ScriptedRepository>,
    pub controller: DashboardController<ScriptedRepository, SharedState>,
    pub state: SharedState,
}

impl Harness {
    /// Controller wired to a scripted repository; not yet initialized.
    pub fn new() -> (Self, Responders) {
        let (repository, responders) = ScriptedRepository::new();
        let state: SharedState = Rc::new(RefCell::new(DashboardState::new()));
        let controller = DashboardController::new(Rc::clone(&repository), Rc::clone(&state));
        let harness = Self { pool: LocalPool::new(), repository, controller, state };
        (harness, responders)
    }

    pub fn initialize(&mut self) -> bool {
        let spawner = self.pool.spawner();
        self.controller.initialize(|task| spawner.spawn_local(task).expect("spawn feed task"))
    }

    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }
}

pub fn sample_prices() -> Vec<PricePoint> {
    vec![PricePoint::new("2020-01-01", 65.2)]
}

pub fn sample_events() -> Vec<EventRecord> {
    vec![EventRecord::new("2020-01-02", "OPEC cut", -5.3)]
}
