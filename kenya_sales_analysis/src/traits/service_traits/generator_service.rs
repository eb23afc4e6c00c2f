use crate::model::sales::sales_dataset::*;

pub trait GeneratorService {
    #[doc = r#"
        Generates `record_count` transactions.
        The output depends only on the generator settings and the catalog.
    "#]
    fn generate_sales_dataset(&self) -> anyhow::Result<SalesDataset>;
}
