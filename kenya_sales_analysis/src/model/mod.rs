pub mod catalog;
pub mod configs;
pub mod sales;
