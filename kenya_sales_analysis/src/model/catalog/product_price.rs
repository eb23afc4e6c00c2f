use crate::common::*;

#[doc = "A product and the inclusive KES range its unit price is drawn from."]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ProductPrice {
    pub name: String,
    pub min_price: i64,
    pub max_price: i64,
}

#[cfg(test)]
impl ProductPrice {
    pub fn contains(&self, unit_price: i64) -> bool {
        self.min_price <= unit_price && unit_price <= self.max_price
    }
}
