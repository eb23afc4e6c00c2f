use crate::common::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct MonthlyAverage {
    /// Month of year, 1-12.
    pub month: u32,
    pub average_sales: f64,
}
