pub mod csv_repository_impl;
