use serde::{Deserialize, Serialize};

/// Granularity of the sales-evolution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodMode {
    /// Last 6 calendar months.
    Monthly,
    /// Last 30 calendar days.
    Daily,
}

/// Which slice of the sales history the dashboard looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesScope {
    All,
    /// Only sales whose product is active in the catalog.
    ActiveProducts,
}

/// One time bucket of the evolution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// Display label, e.g. "Jan/24" (monthly) or "15/01" (daily).
    pub label: String,
    pub quantity: i64,
}

/// Current vs previous month comparison for the summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrowth {
    pub current_month_quantity: i64,
    pub previous_month_quantity: i64,
    /// Percentage change, one decimal. 0.0 when the previous month had no
    /// sales (deliberate policy, never infinity or NaN).
    pub growth_percent: f64,
}

/// One row of the top-products ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTotal {
    pub name: String,
    pub quantity: i64,
}

/// Season of the year under the southern-hemisphere convention the business
/// reports in. The month table is policy and must not be re-localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    /// Fixed display order of the seasonal chart.
    pub const ALL: [Season; 4] = [
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::Spring,
    ];

    /// Classify a calendar month (1-12).
    pub fn for_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Summer,
            3..=5 => Season::Autumn,
            6..=8 => Season::Winter,
            _ => Season::Spring,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

/// One bucket of the seasonality chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonBucket {
    pub season: Season,
    pub quantity: i64,
}

/// One bucket of the all-years calendar-month chart (Jan..Dec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub label: String,
    pub quantity: i64,
}

/// Figures for the dashboard's summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub current_month_quantity: i64,
    pub previous_month_quantity: i64,
    pub growth_percent: f64,
    /// Units sold over the whole history.
    pub total_units: i64,
    pub active_products: usize,
    pub total_products: usize,
}
