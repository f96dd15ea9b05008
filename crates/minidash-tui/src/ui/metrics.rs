//! Metric record rows.

use minidash_common::types::MetricRecord;
use ratatui::text::Line;

/// One text row per record.
pub fn rows(records: &[MetricRecord]) -> impl Iterator<Item = String> + '_ {
    records.iter().map(ToString::to_string)
}

/// Records as ratatui lines for the list area.
#[must_use]
pub fn row_lines(records: &[MetricRecord]) -> Vec<Line<'static>> {
    rows(records).map(Line::from).collect()
}
