use crate::common::*;

#[doc = r#"
    One synthesized sale. Serialized field names are the column headers of the CSV snapshot,
    in column order.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SalesRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Store_Type")]
    pub store_type: String,
    #[serde(rename = "Payment_Method")]
    pub payment_method: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Unit_Price")]
    pub unit_price: i64,
    #[serde(rename = "Total_Sales")]
    pub total_sales: i64,
}

impl SalesRecord {
    pub fn is_total_consistent(&self) -> bool {
        self.quantity.checked_mul(self.unit_price) == Some(self.total_sales)
    }
}
