use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One trading day of provider data
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    // Indices often report no volume at all; the provider's null is read as 0
    pub volume: u64,
}

impl PriceBar {
    // A constructor for convenience
    pub fn new(
        date: NaiveDate,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        volume: u64,
    ) -> Self {
        PriceBar {
            date,
            open_price,
            high_price,
            low_price,
            close_price,
            volume,
        }
    }
}
