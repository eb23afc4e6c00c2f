use crate::common::*;

#[doc = r#"
    Sum of `total_sales` for one group.

    # Fields
    * `key` - group key (month `YYYY-MM`, product, region or store type)
    * `total_sales` - summed sales of the group in KES
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct GroupTotal {
    pub key: String,
    pub total_sales: i64,
}
