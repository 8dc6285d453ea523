use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::{PeriodBucket, PeriodMode};
use contracts::domain::a002_sale::SaleRecord;

use super::window_total;
use crate::shared::calendar::{day_window, month_window};

/// Bucket counts of the evolution chart. Fixed regardless of the data.
pub const MONTHLY_BUCKETS: u32 = 6;
pub const DAILY_BUCKETS: u32 = 30;

/// Time-bucketed units-sold series for the evolution chart, oldest bucket
/// first. Always `MONTHLY_BUCKETS` (resp. `DAILY_BUCKETS`) entries; buckets
/// with no matching sales report 0.
pub fn sales_rollup(
    records: &[SaleRecord],
    mode: PeriodMode,
    reference: NaiveDate,
) -> Vec<PeriodBucket> {
    match mode {
        PeriodMode::Monthly => (0..MONTHLY_BUCKETS)
            .rev()
            .map(|offset| {
                let window = month_window(reference, offset);
                PeriodBucket {
                    label: window.0.format("%b/%y").to_string(),
                    quantity: window_total(records, window),
                }
            })
            .collect(),
        PeriodMode::Daily => (0..DAILY_BUCKETS)
            .rev()
            .map(|offset| {
                let window = day_window(reference, offset);
                PeriodBucket {
                    label: window.0.format("%d/%m").to_string(),
                    quantity: window_total(records, window),
                }
            })
            .collect(),
    }
}
