pub mod product_price;
pub mod sales_catalog;
