use crate::model::sales::sales_record::*;

#[doc = "Running sums of one group of transactions."]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesAccumulator {
    pub total_sales: i64,
    pub quantity: i64,
    pub transactions: usize,
}

impl SalesAccumulator {
    pub fn add(&mut self, record: &SalesRecord) {
        self.total_sales += record.total_sales;
        self.quantity += record.quantity;
        self.transactions += 1;
    }

    #[doc = "Mean `total_sales` per transaction; `None` for an empty group."]
    pub fn mean_sales(&self) -> Option<f64> {
        (self.transactions > 0).then(|| self.total_sales as f64 / self.transactions as f64)
    }

    #[doc = "`total_sales / quantity`; `None` when no units were sold."]
    pub fn average_price(&self) -> Option<f64> {
        (self.quantity > 0).then(|| self.total_sales as f64 / self.quantity as f64)
    }
}
