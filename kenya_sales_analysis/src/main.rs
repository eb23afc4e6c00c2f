/*
Author      : Seunghwan Shin
Create date : 2025-09-00
Description : Synthesizes a Kenyan retail sales dataset, stores it as CSV and reports
              grouped sales aggregates as charts and console tables.

History     : 2025-09-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::csv_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    analysis_service_impl::*, chart_service_impl::*, generator_service_impl::*,
    report_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* Global logger and .env */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        panic!("[main] Failed to initialize the global logger: {:?}", e)
    });

    info!("Sales analysis program start!");

    let total_config: TotalConfig = TotalConfig::load(&SALES_CONFIG_PATH).unwrap_or_else(|e| {
        let err_msg: &str = "[main] Failed to load the sales configuration.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    /* Dependency injection */
    let generator_service: GeneratorServiceImpl = GeneratorServiceImpl::new(
        total_config.generator().clone(),
        total_config.catalog().clone(),
    );
    let sales_repository: CsvRepositoryImpl = CsvRepositoryImpl::default();
    let analysis_service: AnalysisServiceImpl = AnalysisServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let report_service: ReportServiceImpl = ReportServiceImpl::new();

    let main_controller: MainController<
        GeneratorServiceImpl,
        CsvRepositoryImpl,
        AnalysisServiceImpl,
        ChartServiceImpl,
        ReportServiceImpl,
    > = MainController::new(
        generator_service,
        sales_repository,
        analysis_service,
        chart_service,
        report_service,
        total_config.output().clone(),
    );

    if let Err(e) = main_controller.main_task(&mut std::io::stdout()).await {
        error!("{:?}", e);
        panic!("{:?}", e)
    }
}
