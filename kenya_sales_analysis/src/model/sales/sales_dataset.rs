use crate::common::*;

use crate::model::sales::sales_record::*;

pub const CSV_HEADERS: [&str; 8] = [
    "Date",
    "Product",
    "Region",
    "Store_Type",
    "Payment_Method",
    "Quantity",
    "Unit_Price",
    "Total_Sales",
];

#[doc = "Transactions in row order. Read-only once built."]
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_sales(&self) -> i64 {
        self.records.iter().map(|r| r.total_sales).sum()
    }

    pub fn total_quantity(&self) -> i64 {
        self.records.iter().map(|r| r.quantity).sum()
    }

    #[doc = "Fails with an `empty dataset` error when there is nothing to aggregate."]
    pub fn ensure_not_empty(&self, caller: &str) -> anyhow::Result<()> {
        if self.is_empty() {
            return Err(anyhow!(
                "[{}] Cannot aggregate an empty dataset: maxima and averages are undefined",
                caller
            ));
        }

        Ok(())
    }

    #[doc = "Checks `total_sales == quantity * unit_price` on every row."]
    pub fn verify_totals(&self) -> anyhow::Result<()> {
        match self.records.iter().position(|r| !r.is_total_consistent()) {
            Some(row) => {
                let record: &SalesRecord = &self.records[row];
                Err(anyhow!(
                    "[SalesDataset->verify_totals] Row {} ({}): {} * {} != {}",
                    row,
                    record.date,
                    record.quantity,
                    record.unit_price,
                    record.total_sales
                ))
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, quantity: i64, unit_price: i64, total_sales: i64) -> SalesRecord {
        SalesRecord::new(
            NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            "Radio".to_string(),
            "Nakuru".to_string(),
            "Mini Market".to_string(),
            "Cash".to_string(),
            quantity,
            unit_price,
            total_sales,
        )
    }

    #[test]
    fn totals_sum_all_rows() {
        let dataset = SalesDataset::new(vec![record(1, 2, 3000, 6000), record(2, 1, 2500, 2500)]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.total_sales(), 8500);
        assert_eq!(dataset.total_quantity(), 3);
        assert!(dataset.verify_totals().is_ok());
    }

    #[test]
    fn inconsistent_row_is_reported() {
        let dataset = SalesDataset::new(vec![record(1, 2, 3000, 6000), record(2, 2, 2500, 4000)]);
        let err = dataset.verify_totals().unwrap_err();
        assert!(err.to_string().contains("Row 1"));
    }

    #[test]
    fn empty_dataset_cannot_be_aggregated() {
        let dataset = SalesDataset::default();
        assert!(dataset.ensure_not_empty("test").is_err());
    }
}
