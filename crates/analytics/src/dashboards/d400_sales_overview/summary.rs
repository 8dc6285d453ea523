use std::collections::HashSet;

use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::{SalesScope, SalesSummary};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_sale::SaleRecord;

use super::sales_growth;

/// Figures for the dashboard's summary cards: the month-over-month
/// comparison plus all-history unit and catalog counters.
pub fn sales_summary(
    records: &[SaleRecord],
    catalog: &[Product],
    reference: NaiveDate,
) -> SalesSummary {
    let growth = sales_growth(records, reference);
    SalesSummary {
        current_month_quantity: growth.current_month_quantity,
        previous_month_quantity: growth.previous_month_quantity,
        growth_percent: growth.growth_percent,
        total_units: records.iter().map(SaleRecord::units).sum(),
        active_products: catalog.iter().filter(|p| p.is_active).count(),
        total_products: catalog.len(),
    }
}

/// The slice of the snapshot the selected scope looks at. The scope is an
/// explicit parameter, never ambient view state.
pub fn scoped<'a>(
    records: &'a [SaleRecord],
    catalog: &[Product],
    scope: SalesScope,
) -> Vec<&'a SaleRecord> {
    match scope {
        SalesScope::All => records.iter().collect(),
        SalesScope::ActiveProducts => {
            let active: HashSet<&str> = catalog
                .iter()
                .filter(|p| p.is_active)
                .map(|p| p.id.as_str())
                .collect();
            records
                .iter()
                .filter(|sale| active.contains(sale.product_id.as_str()))
                .collect()
        }
    }
}
