pub mod dto;

pub use dto::{
    MonthBucket, MonthGrowth, PeriodBucket, PeriodMode, ProductTotal, SalesScope, SalesSummary,
    Season, SeasonBucket,
};
