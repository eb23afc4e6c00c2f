use crate::common::*;

#[doc = r#"
    Per-product sums used by the "top products by average price" table.

    # Fields
    * `product` - product name
    * `total_sales` - summed sales in KES
    * `quantity` - summed units sold
    * `average_price` - `total_sales / quantity`, unrounded
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ProductInsight {
    pub product: String,
    pub total_sales: i64,
    pub quantity: i64,
    pub average_price: f64,
}
