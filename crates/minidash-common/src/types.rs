//! Domain primitive types used across the minidash workspace.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{CURRENCY_PREFIX, FIELD_SEPARATOR, QUERY_END, QUERY_START};
use crate::error::{DashboardError, Result};

/// One aggregated analytics row as served by the metrics endpoint.
///
/// Every field is rendered exactly as received; no date parsing, numeric
/// formatting or locale handling takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Calendar date or date-like label.
    pub date: String,
    /// Order status label (e.g. `paid`).
    pub status: String,
    /// Payment method label (e.g. `credit_card`).
    pub payment_method: String,
    /// Number of orders in this bucket.
    pub total_orders: u64,
    /// Revenue amount for this bucket.
    pub total_revenue: f64,
}

impl fmt::Display for MetricRecord {
    /// Formats the record as a single dashboard row:
    /// `<date> | <status> | <payment_method> | <total_orders> | R$ <total_revenue>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{date}{sep}{status}{sep}{method}{sep}{orders}{sep}{currency} {revenue}",
            date = self.date,
            status = self.status,
            method = self.payment_method,
            orders = self.total_orders,
            revenue = self.total_revenue,
            sep = FIELD_SEPARATOR,
            currency = CURRENCY_PREFIX,
        )
    }
}

/// Ordered sequence of metric records, kept in server order.
///
/// No uniqueness or ordering constraint is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsCollection(Vec<MetricRecord>);

impl MetricsCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the records in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> {
        self.0.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[MetricRecord] {
        &self.0
    }
}

impl From<Vec<MetricRecord>> for MetricsCollection {
    fn from(records: Vec<MetricRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<MetricRecord> for MetricsCollection {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MetricsCollection {
    type Item = MetricRecord;
    type IntoIter = std::vec::IntoIter<MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetricsCollection {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Optional inclusive date bounds forwarded to the metrics endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with neither bound set.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Creates a range from optional bounds.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Config` if `start` falls after `end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DashboardError::Config {
                    message: format!("date range start {s} is after end {e}"),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Returns `true` when neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Query parameters for the bounds that are set, `start` first.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(start) = self.start {
            pairs.push((QUERY_START, start.to_string()));
        }
        if let Some(end) = self.end {
            pairs.push((QUERY_END, end.to_string()));
        }
        pairs
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "all dates"),
            (Some(s), None) => write!(f, "from {s}"),
            (None, Some(e)) => write!(f, "until {e}"),
            (Some(s), Some(e)) => write!(f, "{s} to {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, orders: u64, revenue: f64) -> MetricRecord {
        MetricRecord {
            date: date.into(),
            status: "paid".into(),
            payment_method: "credit_card".into(),
            total_orders: orders,
            total_revenue: revenue,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, crate::constants::DATE_FORMAT).expect("valid date")
    }

    #[test]
    fn record_displays_as_dashboard_row() {
        let row = record("2024-01-01", 5, 120.50).to_string();
        assert_eq!(row, "2024-01-01 | paid | credit_card | 5 | R$ 120.5");
    }

    #[test]
    fn whole_revenue_has_no_decimal_places() {
        let row = record("2024-01-02", 1, 120.0).to_string();
        assert!(row.ends_with("| R$ 120"), "got {row}");
    }

    #[test]
    fn revenue_is_not_rounded() {
        let row = record("2024-01-03", 2, 99.999).to_string();
        assert!(row.ends_with("| R$ 99.999"), "got {row}");
    }

    #[test]
    fn collection_keeps_insertion_order_and_duplicates() {
        let collection: MetricsCollection = vec![
            record("2024-01-02", 1, 1.0),
            record("2024-01-01", 1, 1.0),
            record("2024-01-02", 1, 1.0),
        ]
        .into();
        let dates: Vec<_> = collection.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-02", "2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn collection_serializes_as_plain_array() {
        let collection = MetricsCollection::from(vec![record("2024-01-01", 5, 120.5)]);
        let json = serde_json::to_value(&collection).expect("serialize");
        assert!(json.is_array());
        assert_eq!(json[0]["payment_method"], "credit_card");
    }

    #[test]
    fn range_rejects_start_after_end() {
        let err = DateRange::new(Some(date("2024-02-01")), Some(date("2024-01-01")));
        assert!(matches!(err, Err(DashboardError::Config { .. })));
    }

    #[test]
    fn range_accepts_single_day() {
        let day = date("2024-01-01");
        let range = DateRange::new(Some(day), Some(day)).expect("same-day range");
        assert_eq!(range.to_string(), "2024-01-01 to 2024-01-01");
    }

    #[test]
    fn unbounded_range_has_no_query_pairs() {
        assert!(DateRange::unbounded().query_pairs().is_empty());
        assert!(DateRange::default().is_unbounded());
    }

    #[test]
    fn range_query_pairs_only_include_set_bounds() {
        let range = DateRange::new(None, Some(date("2024-03-31"))).expect("valid range");
        assert_eq!(range.query_pairs(), vec![("end", "2024-03-31".to_string())]);

        let range =
            DateRange::new(Some(date("2024-03-01")), Some(date("2024-03-31"))).expect("valid");
        assert_eq!(
            range.query_pairs(),
            vec![
                ("start", "2024-03-01".to_string()),
                ("end", "2024-03-31".to_string()),
            ]
        );
    }
}
