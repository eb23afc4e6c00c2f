use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct RegionInsight {
    pub region: String,
    pub total_sales: i64,
    pub quantity: i64,
}
