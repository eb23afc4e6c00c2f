use crate::common::*;

use crate::dto::{
    group_total::*, monthly_average::*, payment_share::*, product_insight::*, region_insight::*,
    sales_summary::*,
};

#[doc = "Everything the reporter needs: the grouped results and the summary scalars."]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SalesAnalysis {
    pub monthly_sales: Vec<GroupTotal>,
    pub product_sales: Vec<GroupTotal>,
    pub regional_sales: Vec<GroupTotal>,
    pub payment_shares: Vec<PaymentShare>,
    pub store_type_sales: Vec<GroupTotal>,
    pub top_products_by_average_price: Vec<ProductInsight>,
    pub regional_performance: Vec<RegionInsight>,
    pub monthly_average_sales: Vec<MonthlyAverage>,
    pub summary: SalesSummary,
}
