use chrono::Datelike;
use contracts::dashboards::d400_sales_overview::{MonthBucket, Season, SeasonBucket};
use contracts::domain::a002_sale::SaleRecord;

use super::dated;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Units sold per season over the whole history, in the fixed order
/// Summer, Autumn, Winter, Spring. Every date-valid record lands in
/// exactly one bucket.
pub fn seasonal_totals(records: &[SaleRecord]) -> Vec<SeasonBucket> {
    let mut buckets: Vec<SeasonBucket> = Season::ALL
        .into_iter()
        .map(|season| SeasonBucket { season, quantity: 0 })
        .collect();

    for (sale, date) in dated(records) {
        let season = Season::for_month(date.month());
        if let Some(bucket) = buckets.iter_mut().find(|b| b.season == season) {
            bucket.quantity += sale.units();
        }
    }
    buckets
}

/// Units sold per calendar month (Jan..Dec) across all years present in
/// the history.
pub fn calendar_month_totals(records: &[SaleRecord]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = MONTH_LABELS
        .iter()
        .map(|label| MonthBucket {
            label: (*label).to_string(),
            quantity: 0,
        })
        .collect();

    for (sale, date) in dated(records) {
        buckets[date.month0() as usize].quantity += sale.units();
    }
    buckets
}
