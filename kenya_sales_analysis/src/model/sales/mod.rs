pub mod sales_accumulator;
pub mod sales_dataset;
pub mod sales_record;
