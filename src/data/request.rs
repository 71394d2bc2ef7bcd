use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::error::FetchError;
use crate::domain::Symbol;
use crate::utils::time_utils::{date_to_epoch_sec, parse_standard_date};

/// Symbol plus date range for one fetch
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub symbol: Symbol,
    pub start_date: NaiveDate,
    /// None means "up to the latest available day"
    pub end_date: Option<NaiveDate>,
}

impl FetchRequest {
    pub fn parse(
        symbol: &str,
        start_date: &str,
        end_date: Option<&str>,
    ) -> Result<Self, FetchError> {
        if symbol.trim().is_empty() {
            return Err(FetchError::InvalidSymbol(symbol.to_string()));
        }

        let start = parse_standard_date(start_date).ok_or_else(|| {
            FetchError::InvalidDate(format!("expected YYYY-MM-DD start date, got {:?}", start_date))
        })?;

        let end = match end_date {
            Some(text) => Some(parse_standard_date(text).ok_or_else(|| {
                FetchError::InvalidDate(format!("expected YYYY-MM-DD end date, got {:?}", text))
            })?),
            None => None,
        };

        if let Some(end) = end {
            if end < start {
                return Err(FetchError::InvalidDate(format!(
                    "end date {} is before start date {}",
                    end, start
                )));
            }
        }

        Ok(FetchRequest {
            symbol: Symbol::new(symbol),
            start_date: start,
            end_date: end,
        })
    }

    /// Provider query window in epoch seconds. The end bound is exclusive;
    /// an open end runs up to `now_sec`.
    pub fn period_secs(&self, now_sec: i64) -> (i64, i64) {
        let start = date_to_epoch_sec(self.start_date);
        let end = self.end_date.map(date_to_epoch_sec).unwrap_or(now_sec);
        (start, end)
    }
}
