pub mod sales_repository;
