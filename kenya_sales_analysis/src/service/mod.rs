pub mod analysis_service_impl;
pub mod chart_service_impl;
pub mod generator_service_impl;
pub mod report_service_impl;
