use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{AbortHandle, Abortable, LocalBoxFuture};

use crate::domain::{
    errors::FetchResult,
    logging::LogComponent,
    market_data::{DashboardRepository, EventRecord, PricePoint},
    state::DashboardState,
};
use crate::{log_debug, log_error, log_info};

/// Somewhere the controller can write `DashboardState` updates.
///
/// In the browser this is a Leptos signal so the page re-renders on every
/// write; tests use a plain `Rc<RefCell<_>>`.
pub trait StateCell: Clone + 'static {
    fn update_state(&self, f: impl FnOnce(&mut DashboardState));
}

impl StateCell for Rc<RefCell<DashboardState>> {
    fn update_state(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.borrow_mut());
    }
}

#[derive(Debug)]
enum Lifecycle {
    Idle,
    Mounted(Vec<AbortHandle>),
    TornDown,
}

/// Drives one dashboard view: fires both feed requests once on mount,
/// applies their results and cancels whatever is still in flight on teardown.
pub struct DashboardController<R, S> {
    repository: Rc<R>,
    state: S,
    lifecycle: RefCell<Lifecycle>,
}

impl<R, S> DashboardController<R, S>
where
    R: DashboardRepository + 'static,
    S: StateCell,
{
    pub fn new(repository: Rc<R>, state: S) -> Self {
        Self { repository, state, lifecycle: RefCell::new(Lifecycle::Idle) }
    }

    /// Start both feed requests. Runs at most once per controller: later
    /// calls, and calls after `teardown`, return `false` and spawn nothing.
    pub fn initialize(&self, spawn: impl Fn(LocalBoxFuture<'static, ()>)) -> bool {
        let mut lifecycle = self.lifecycle.borrow_mut();
        if !matches!(*lifecycle, Lifecycle::Idle) {
            log_debug!(
                LogComponent::Application("DashboardController"),
                "initialize skipped, controller is {:?}",
                *lifecycle
            );
            return false;
        }

        let (price_handle, price_task) = self.price_task();
        let (event_handle, event_task) = self.event_task();
        *lifecycle = Lifecycle::Mounted(vec![price_handle, event_handle]);
        drop(lifecycle);

        log_info!(LogComponent::Application("DashboardController"), "requesting price history and event analysis");
        spawn(price_task);
        spawn(event_task);
        true
    }

    /// Cancel in-flight requests. Responses that arrive afterwards are dropped
    /// without touching the state.
    pub fn teardown(&self) {
        let previous = std::mem::replace(&mut *self.lifecycle.borrow_mut(), Lifecycle::TornDown);
        if let Lifecycle::Mounted(handles) = previous {
            for handle in handles {
                handle.abort();
            }
            self.repository.cancel();
            log_debug!(LogComponent::Application("DashboardController"), "dashboard torn down, pending feeds aborted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(*self.lifecycle.borrow(), Lifecycle::Mounted(_))
    }

    fn price_task(&self) -> (AbortHandle, LocalBoxFuture<'static, ()>) {
        let repository = Rc::clone(&self.repository);
        let state = self.state.clone();
        let task = async move {
            let result = repository.fetch_prices().await;
            handle_price_response(&state, result);
        };
        abortable(task)
    }

    fn event_task(&self) -> (AbortHandle, LocalBoxFuture<'static, ()>) {
        let repository = Rc::clone(&self.repository);
        let state = self.state.clone();
        let task = async move {
            let result = repository.fetch_events().await;
            handle_event_response(&state, result);
        };
        abortable(task)
    }
}

fn abortable(task: impl std::future::Future<Output = ()> + 'static) -> (AbortHandle, LocalBoxFuture<'static, ()>) {
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(task, registration).map(|_| ()).boxed_local();
    (handle, task)
}

pub fn handle_price_response(state: &impl StateCell, result: FetchResult<Vec<PricePoint>>) {
    match &result {
        Ok(points) => {
            log_info!(LogComponent::Application("PriceFeed"), "loaded {} price points", points.len());
        }
        Err(err) => {
            log_error!(LogComponent::Application("PriceFeed"), "Error fetching oil data: {}", err);
        }
    }
    state.update_state(|s| s.apply_prices(result));
}

pub fn handle_event_response(state: &impl StateCell, result: FetchResult<Vec<EventRecord>>) {
    match &result {
        Ok(records) => {
            log_info!(LogComponent::Application("EventFeed"), "loaded {} event records", records.len());
        }
        Err(err) => {
            log_error!(LogComponent::Application("EventFeed"), "Error fetching event data: {}", err);
        }
    }
    state.update_state(|s| s.apply_events(result));
}
