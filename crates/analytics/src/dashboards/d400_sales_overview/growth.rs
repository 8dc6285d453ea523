use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::MonthGrowth;
use contracts::domain::a002_sale::SaleRecord;

use super::window_total;
use crate::shared::calendar::month_window;

/// Units sold this month vs the previous month, with the percentage change
/// for the summary card.
pub fn sales_growth(records: &[SaleRecord], reference: NaiveDate) -> MonthGrowth {
    let current = window_total(records, month_window(reference, 0));
    let previous = window_total(records, month_window(reference, 1));
    MonthGrowth {
        current_month_quantity: current,
        previous_month_quantity: previous,
        growth_percent: growth_percent(current, previous),
    }
}

/// Percentage change rounded to one decimal. A previous month with no
/// sales reads as 0.0 growth: the card shows a flat month instead of an
/// infinite jump from an empty base.
fn growth_percent(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    let raw = (current - previous) as f64 / previous as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
