use crate::domain::market_data::{EventRecord, PricePoint};
use crate::domain::state::DashboardState;

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const PAGE_TITLE: &str = "Brent Oil Price Dashboard";
pub const PRICES_HEADING: &str = "Historical Oil Prices";
pub const EVENTS_HEADING: &str = "Event Analysis";
pub const PRICE_TABLE_HEADER: [&str; 2] = ["Date", "Price"];

/// What the page shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// Only the placeholder, whatever else has already arrived
    Loading,
    Loaded(DashboardPage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub price_rows: Vec<PriceRow>,
    pub event_items: Vec<EventItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub key: String,
    pub date: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventItem {
    pub key: String,
    pub text: String,
}

/// Row identity for keyed rendering. Dates repeat (several events on one
/// day), so the position in the sequence is part of the key.
pub fn row_key(index: usize, date: &str) -> String {
    format!("{index}:{date}")
}

/// `{Event} on {Date}: Change 1M: {Change_1M}%`; a missing change leaves the
/// slot before `%` empty.
pub fn format_event_line(record: &EventRecord) -> String {
    let change = record.change_1m.map(|c| c.to_string()).unwrap_or_default();
    format!("{} on {}: Change 1M: {}%", record.event, record.date, change)
}

pub fn price_row(index: usize, point: &PricePoint) -> PriceRow {
    PriceRow { key: row_key(index, &point.date), date: point.date.clone(), price: point.price.to_string() }
}

pub fn event_item(index: usize, record: &EventRecord) -> EventItem {
    EventItem { key: row_key(index, &record.date), text: format_event_line(record) }
}

pub fn render_dashboard(state: &DashboardState) -> DashboardView {
    if state.is_loading() {
        return DashboardView::Loading;
    }

    DashboardView::Loaded(DashboardPage {
        price_rows: state.prices().iter().enumerate().map(|(i, p)| price_row(i, p)).collect(),
        event_items: state.events().iter().enumerate().map(|(i, e)| event_item(i, e)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_events_get_distinct_keys() {
        let a = event_item(0, &EventRecord::new("2020-03-09", "OPEC talks collapse", -30.1));
        let b = event_item(1, &EventRecord::new("2020-03-09", "Equity crash", -30.1));
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn whole_number_price_has_no_fraction() {
        let row = price_row(0, &PricePoint::new("2020-01-01", 65.0));
        assert_eq!(row.price, "65");
    }

    #[test]
    fn null_one_month_change_renders_empty_slot() {
        let record: EventRecord =
            serde_json::from_str(r#"{"Date":"2001-09-11","Event":"9/11","Change_1M":null}"#).unwrap();
        assert_eq!(format_event_line(&record), "9/11 on 2001-09-11: Change 1M: %");
    }
}
