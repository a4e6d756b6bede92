use crate::domain::errors::FetchResult;
use crate::domain::market_data::{EventRecord, PricePoint};
use std::future::Future;

/// Source of the two dashboard feeds.
///
/// The two calls are independent: neither may wait on the other, and a
/// failure of one says nothing about the other.
pub trait DashboardRepository {
    /// Full price history, in the order the source returns it
    fn fetch_prices(&self) -> impl Future<Output = FetchResult<Vec<PricePoint>>>;

    /// Event impact records, in the order the source returns them
    fn fetch_events(&self) -> impl Future<Output = FetchResult<Vec<EventRecord>>>;

    /// Abort whatever the source still has in flight. Sources without
    /// cancellable transport keep the default no-op.
    fn cancel(&self) {}
}
