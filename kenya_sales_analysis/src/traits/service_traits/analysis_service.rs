use crate::dto::{
    group_total::*, monthly_average::*, payment_share::*, product_insight::*, region_insight::*,
    sales_analysis::*, sales_summary::*,
};
use crate::model::sales::sales_dataset::*;

#[doc = "Grouped aggregates over a sales dataset. Every operation is pure."]
pub trait AnalysisService {
    #[doc = "Sum of sales per `YYYY-MM`, chronological."]
    fn monthly_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal>;
    #[doc = "Sum of sales per product, largest first."]
    fn product_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal>;
    #[doc = "Sum of sales per region, in region order."]
    fn regional_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal>;
    #[doc = "Sum of sales and share of the grand total per payment method, in method order."]
    fn payment_method_shares(&self, dataset: &SalesDataset) -> Vec<PaymentShare>;
    #[doc = "Sum of sales per store type, in store type order."]
    fn store_type_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal>;
    #[doc = "The `limit` products with the highest `total_sales / quantity`."]
    fn top_products_by_average_price(
        &self,
        dataset: &SalesDataset,
        limit: usize,
    ) -> Vec<ProductInsight>;
    #[doc = "Sales and units per region, largest sales first."]
    fn regional_performance(&self, dataset: &SalesDataset) -> Vec<RegionInsight>;
    #[doc = "Mean sales per transaction for each month of year present."]
    fn monthly_average_sales(&self, dataset: &SalesDataset) -> Vec<MonthlyAverage>;
    #[doc = "Scalar summary. Fails on an empty dataset."]
    fn summarize(&self, dataset: &SalesDataset) -> anyhow::Result<SalesSummary>;
    #[doc = "All of the above in one result. Fails on an empty dataset."]
    fn analyze(&self, dataset: &SalesDataset, top_product_limit: usize)
        -> anyhow::Result<SalesAnalysis>;
}
