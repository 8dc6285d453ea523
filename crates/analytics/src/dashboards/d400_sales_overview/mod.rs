//! Sales overview dashboard: the derived series behind the charts and
//! summary cards. Each function re-derives its result from the snapshot it
//! is given; refresh means calling again with newer data.

pub mod growth;
pub mod rollup;
pub mod seasonal;
pub mod summary;
pub mod top_products;

pub use growth::sales_growth;
pub use rollup::sales_rollup;
pub use seasonal::{calendar_month_totals, seasonal_totals};
pub use summary::{sales_summary, scoped};
pub use top_products::{top_products, with_resolved_names, DEFAULT_TOP_LIMIT};

use chrono::NaiveDate;
use contracts::domain::a002_sale::SaleRecord;

use crate::shared::calendar::{in_window, Window};

/// Records paired with their resolved calendar date. Records without a
/// parseable date are skipped here, which is what keeps one bad row from
/// aborting a dashboard refresh.
pub(crate) fn dated(records: &[SaleRecord]) -> impl Iterator<Item = (&SaleRecord, NaiveDate)> {
    records.iter().filter_map(|sale| match sale.effective_date() {
        Some(date) => Some((sale, date)),
        None => {
            tracing::debug!(sale_id = %sale.id, "sale has no parseable date, excluded from time buckets");
            None
        }
    })
}

/// Sum of units over the records whose date falls inside `window`.
pub(crate) fn window_total(records: &[SaleRecord], window: Window) -> i64 {
    dated(records)
        .filter(|(_, date)| in_window(*date, window))
        .map(|(sale, _)| sale.units())
        .sum()
}
