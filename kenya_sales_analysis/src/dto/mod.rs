pub mod group_total;
pub mod monthly_average;
pub mod payment_share;
pub mod product_insight;
pub mod region_insight;
pub mod sales_analysis;
pub mod sales_summary;
