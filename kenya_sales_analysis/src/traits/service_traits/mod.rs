pub mod analysis_service;
pub mod chart_service;
pub mod generator_service;
pub mod report_service;
