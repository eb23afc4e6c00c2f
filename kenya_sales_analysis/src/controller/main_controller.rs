use crate::common::*;

use crate::dto::{group_total::*, sales_analysis::*};

use crate::enums::chart_kind::*;

use crate::model::{configs::output_config::*, sales::sales_dataset::*};

use crate::traits::{
    repository_traits::sales_repository::*,
    service_traits::{
        analysis_service::*, chart_service::*, generator_service::*, report_service::*,
    },
};

#[derive(Debug, new)]
pub struct MainController<G, R, A, C, P>
where
    G: GeneratorService,
    R: SalesRepository,
    A: AnalysisService,
    C: ChartService,
    P: ReportService,
{
    generator_service: G,
    sales_repository: R,
    analysis_service: A,
    chart_service: C,
    report_service: P,
    output_config: OutputConfig,
}

impl<G, R, A, C, P> MainController<G, R, A, C, P>
where
    G: GeneratorService,
    R: SalesRepository,
    A: AnalysisService,
    C: ChartService,
    P: ReportService,
{
    #[doc = r#"
        Runs the whole batch once, in order:

        1. generate the dataset from the configured seed and catalog
        2. write the CSV snapshot
        3. load the snapshot back and aggregate it
        4. render the five charts
        5. write the summary and insight tables to `out`

        # Arguments
        * `out` - console sink for the report (stdout in the binary)

        # Returns
        * `anyhow::Result<SalesAnalysis>` - the aggregates that were reported
    "#]
    pub async fn main_task(&self, out: &mut dyn Write) -> anyhow::Result<SalesAnalysis> {
        /* 1. Generate */
        let dataset: SalesDataset = self.generator_service.generate_sales_dataset()?;

        /* 2. Persist the snapshot */
        let data_path: PathBuf = self.output_config.data_path();
        self.sales_repository
            .save_dataset(&dataset, &data_path)
            .await?;

        /* 3. Aggregate the stored snapshot */
        let stored: SalesDataset = self.sales_repository.load_dataset(&data_path).await?;

        if stored.len() != dataset.len() {
            return Err(anyhow!(
                "[MainController->main_task] Snapshot at {:?} has {} rows, expected {}",
                data_path,
                stored.len(),
                dataset.len()
            ));
        }

        let analysis: SalesAnalysis = self
            .analysis_service
            .analyze(&stored, self.output_config.top_product_limit)?;

        /* 4. Charts */
        self.generate_charts(&analysis).await?;

        /* 5. Console report */
        self.report_service.write_console_report(&analysis, out)?;
        out.flush()?;

        info!("Sales analysis finished for {} records", stored.len());

        Ok(analysis)
    }

    #[doc = "Renders every chart of `ALL_CHART_KINDS` into the output directory."]
    async fn generate_charts(&self, analysis: &SalesAnalysis) -> anyhow::Result<()> {
        for chart_kind in ALL_CHART_KINDS {
            let output_path: PathBuf = self.output_config.chart_path(chart_kind);

            if let Err(e) = self.generate_chart(chart_kind, analysis, &output_path).await {
                error!(
                    "[MainController->generate_charts] Failed to render {:?}: {:?}",
                    chart_kind, e
                );
                return Err(e);
            }
        }

        Ok(())
    }

    async fn generate_chart(
        &self,
        chart_kind: ChartKind,
        analysis: &SalesAnalysis,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let title: &str = get_title(chart_kind);

        let split = |groups: &[GroupTotal]| -> (Vec<String>, Vec<i64>) {
            groups
                .iter()
                .map(|g| (g.key.clone(), g.total_sales))
                .unzip()
        };

        match chart_kind {
            ChartKind::MonthlySalesTrend => {
                let (months, totals) = split(&analysis.monthly_sales[..]);
                let thousands: Vec<f64> = totals.iter().map(|t| *t as f64 / 1000.0).collect();

                self.chart_service
                    .generate_line_chart(
                        title,
                        months,
                        thousands,
                        output_path,
                        "Month",
                        "Total Sales (Thousands KES)",
                    )
                    .await
            }
            ChartKind::ProductSales => {
                let (products, totals) = split(&analysis.product_sales[..]);
                self.chart_service
                    .generate_bar_chart(
                        title,
                        products,
                        totals,
                        output_path,
                        "Product",
                        "Total Sales (KES)",
                    )
                    .await
            }
            ChartKind::RegionalSales => {
                let (regions, totals) = split(&analysis.regional_sales[..]);
                self.chart_service
                    .generate_bar_chart(
                        title,
                        regions,
                        totals,
                        output_path,
                        "Region",
                        "Total Sales (KES)",
                    )
                    .await
            }
            ChartKind::PaymentMethods => {
                let (methods, totals): (Vec<String>, Vec<f64>) = analysis
                    .payment_shares
                    .iter()
                    .map(|p| (p.payment_method.clone(), p.total_sales as f64))
                    .unzip();

                self.chart_service
                    .generate_pie_chart(title, methods, totals, output_path)
                    .await
            }
            ChartKind::StoreTypeSales => {
                let (store_types, totals) = split(&analysis.store_type_sales[..]);
                self.chart_service
                    .generate_bar_chart(
                        title,
                        store_types,
                        totals,
                        output_path,
                        "Store Type",
                        "Total Sales (KES)",
                    )
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use crate::model::{catalog::sales_catalog::*, configs::generator_config::*};
    use crate::repository::csv_repository_impl::*;
    use crate::service::{
        analysis_service_impl::*, generator_service_impl::*, report_service_impl::*,
    };

    #[derive(Debug, Clone, PartialEq)]
    struct ChartCall {
        kind: &'static str,
        title: String,
        labels: Vec<String>,
        values: Vec<f64>,
        path: PathBuf,
    }

    #[derive(Debug, Default)]
    struct RecordingChartService {
        calls: Mutex<Vec<ChartCall>>,
    }

    impl RecordingChartService {
        fn record(
            &self,
            kind: &'static str,
            title: &str,
            labels: Vec<String>,
            values: Vec<f64>,
            path: &Path,
        ) {
            self.calls.lock().unwrap().push(ChartCall {
                kind,
                title: title.to_string(),
                labels,
                values,
                path: path.to_path_buf(),
            });
        }
    }

    #[async_trait]
    impl ChartService for RecordingChartService {
        async fn generate_line_chart(
            &self,
            title: &str,
            x_labels: Vec<String>,
            y_data: Vec<f64>,
            output_path: &Path,
            _x_label: &str,
            _y_label: &str,
        ) -> anyhow::Result<()> {
            self.record("line", title, x_labels, y_data, output_path);
            Ok(())
        }

        async fn generate_bar_chart(
            &self,
            title: &str,
            categories: Vec<String>,
            values: Vec<i64>,
            output_path: &Path,
            _x_label: &str,
            _y_label: &str,
        ) -> anyhow::Result<()> {
            let values: Vec<f64> = values.into_iter().map(|v| v as f64).collect();
            self.record("bar", title, categories, values, output_path);
            Ok(())
        }

        async fn generate_pie_chart(
            &self,
            title: &str,
            labels: Vec<String>,
            values: Vec<f64>,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.record("pie", title, labels, values, output_path);
            Ok(())
        }
    }

    fn controller(
        record_count: usize,
        output_dir: &Path,
    ) -> MainController<
        GeneratorServiceImpl,
        CsvRepositoryImpl,
        AnalysisServiceImpl,
        RecordingChartService,
        ReportServiceImpl,
    > {
        MainController::new(
            GeneratorServiceImpl::new(
                GeneratorConfig::with_record_count(record_count),
                SalesCatalog::default(),
            ),
            CsvRepositoryImpl::default(),
            AnalysisServiceImpl::new(),
            RecordingChartService::default(),
            ReportServiceImpl::new(),
            OutputConfig::new(output_dir.to_path_buf(), "kenya_sales_data.csv".to_string(), 5),
        )
    }

    #[tokio::test]
    async fn full_run_writes_snapshot_and_requests_all_charts() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller(120, dir.path());
        let mut console: Vec<u8> = Vec::new();

        let analysis = controller.main_task(&mut console).await.unwrap();

        let csv = fs::read_to_string(dir.path().join("kenya_sales_data.csv")).unwrap();
        assert_eq!(csv.lines().count(), 121);

        let calls = controller.chart_service.calls.lock().unwrap().clone();
        let kinds: Vec<&str> = calls.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec!["line", "bar", "bar", "pie", "bar"]);

        let files: Vec<String> = calls
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            files,
            vec![
                "kenya_monthly_sales_trend.png",
                "kenya_product_sales.png",
                "kenya_regional_sales.png",
                "kenya_payment_methods.png",
                "kenya_store_type_sales.png",
            ]
        );
        assert_eq!(calls[0].title, "Monthly Sales Trend (Thousands KES)");

        /* Monthly trend is plotted in thousands */
        let plotted: f64 = calls[0].values.iter().sum();
        let expected: f64 = analysis.summary.total_revenue as f64 / 1000.0;
        assert!((plotted - expected).abs() < 1e-6);

        /* Product bars follow the descending product order */
        let product_labels: Vec<String> =
            analysis.product_sales.iter().map(|g| g.key.clone()).collect();
        assert_eq!(calls[1].labels, product_labels);

        assert!(analysis.top_products_by_average_price.len() <= 5);

        /* The report goes to the sink handed to the run */
        let report = String::from_utf8(console).unwrap();
        assert!(report.contains("Kenyan Market Sales Analysis Summary:"));
        assert!(report.contains("Product Insights:"));
        assert!(report.contains("Regional Insights:"));
    }

    #[tokio::test]
    async fn zero_records_fail_before_anything_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller(0, dir.path());

        let mut console: Vec<u8> = Vec::new();

        assert!(controller.main_task(&mut console).await.is_err());
        assert!(!dir.path().join("kenya_sales_data.csv").exists());
        assert!(controller.chart_service.calls.lock().unwrap().is_empty());
        assert!(console.is_empty());
    }
}
