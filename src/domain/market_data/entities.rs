pub use super::value_objects::{PercentChange, Price};
use serde::{Deserialize, Serialize};

/// One historical observation from `GET /api/data`.
///
/// `date` is kept as the label the server sent; it is never parsed or re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Price")]
    pub price: Price,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self { date: date.into(), price: Price::new(price) }
    }
}

/// One labelled market event from `GET /api/events`.
///
/// Every numeric field may be `null` (or absent) when the price history does
/// not cover the window around the event; such records are still listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Change_1M", default)]
    pub change_1m: Option<PercentChange>,
    #[serde(rename = "Change_3M", default, skip_serializing_if = "Option::is_none")]
    pub change_3m: Option<PercentChange>,
    #[serde(rename = "Change_6M", default, skip_serializing_if = "Option::is_none")]
    pub change_6m: Option<PercentChange>,
    #[serde(rename = "Cumulative Return Before", default, skip_serializing_if = "Option::is_none")]
    pub cumulative_return_before: Option<f64>,
    #[serde(rename = "Cumulative Return After", default, skip_serializing_if = "Option::is_none")]
    pub cumulative_return_after: Option<f64>,
}

impl EventRecord {
    pub fn new(date: impl Into<String>, event: impl Into<String>, change_1m: f64) -> Self {
        Self {
            date: date.into(),
            event: event.into(),
            change_1m: Some(PercentChange::new(change_1m)),
            change_3m: None,
            change_6m: None,
            cumulative_return_before: None,
            cumulative_return_after: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_point_uses_capitalised_keys() {
        let point: PricePoint = serde_json::from_str(r#"{"Date":"20-May-87","Price":18.63}"#).unwrap();
        assert_eq!(point, PricePoint::new("20-May-87", 18.63));
    }

    #[test]
    fn extra_horizons_are_optional() {
        let record: EventRecord = serde_json::from_str(
            r#"{"Date":"2022-02-24","Event":"Russian Invasion of Ukraine","Change_1M":22.5,"Change_3M":null}"#,
        )
        .unwrap();
        assert_eq!(record.change_1m, Some(PercentChange::new(22.5)));
        assert_eq!(record.change_3m, None);
        assert_eq!(record.change_6m, None);
    }

    #[test]
    fn null_one_month_change_still_decodes() {
        let record: EventRecord =
            serde_json::from_str(r#"{"Date":"2001-09-11","Event":"9/11","Change_1M":null}"#).unwrap();
        assert_eq!(record.change_1m, None);

        let record: EventRecord = serde_json::from_str(r#"{"Date":"2001-09-11","Event":"9/11"}"#).unwrap();
        assert_eq!(record.change_1m, None);
    }
}
