use crate::common::*;

#[doc = r#"
    Scalar results of the analysis.

    # Fields
    * `total_revenue` - grand total of `total_sales`
    * `average_transaction_value` - mean `total_sales` per transaction
    * `total_units_sold` - sum of `quantity`
    * `best_product_by_value` - product with the largest summed sales
    * `best_product_by_volume` - product with the largest summed quantity
    * `top_region` / `top_payment_method` / `top_store_type` - largest summed sales in their grouping
    * `peak_sales_month` - month of year (1-12) with the highest mean sales per transaction
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SalesSummary {
    pub total_revenue: i64,
    pub average_transaction_value: f64,
    pub total_units_sold: i64,
    pub best_product_by_value: String,
    pub best_product_by_volume: String,
    pub top_region: String,
    pub top_payment_method: String,
    pub top_store_type: String,
    pub peak_sales_month: u32,
}
