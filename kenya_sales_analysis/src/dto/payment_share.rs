use crate::common::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct PaymentShare {
    pub payment_method: String,
    pub total_sales: i64,
    /// Percentage of the grand total, unrounded.
    pub share_percent: f64,
}
