use crate::common::*;

use crate::dto::{
    product_insight::*, region_insight::*, sales_analysis::*, sales_summary::*,
};

use crate::traits::service_traits::report_service::*;

use crate::utils_modules::{format_utils::*, time_utils::*};

const NAME_WIDTH: usize = 20;
const NUMBER_WIDTH: usize = 18;

#[derive(Debug, Clone, new)]
pub struct ReportServiceImpl;

impl ReportServiceImpl {
    #[doc = "Key/value lines of the summary. Currency gets separators and two decimals; counts are printed as-is."]
    fn summary_lines(&self, summary: &SalesSummary) -> Vec<(&'static str, String)> {
        vec![
            (
                "Total Revenue (KES)",
                format_amount(summary.total_revenue as f64),
            ),
            (
                "Average Transaction Value (KES)",
                format_amount(summary.average_transaction_value),
            ),
            ("Total Units Sold", summary.total_units_sold.to_string()),
            (
                "Best Selling Product (by value)",
                summary.best_product_by_value.clone(),
            ),
            (
                "Best Selling Product (by volume)",
                summary.best_product_by_volume.clone(),
            ),
            ("Top Region", summary.top_region.clone()),
            (
                "Most Popular Payment Method",
                summary.top_payment_method.clone(),
            ),
            (
                "Best Performing Store Type",
                summary.top_store_type.clone(),
            ),
            (
                "Peak Sales Month",
                format!(
                    "{} ({})",
                    summary.peak_sales_month,
                    month_name(summary.peak_sales_month)
                ),
            ),
        ]
    }

    fn write_summary(&self, summary: &SalesSummary, out: &mut dyn Write) -> anyhow::Result<()> {
        write_section_header(out, "Kenyan Market Sales Analysis Summary:")?;

        for (label, value) in self.summary_lines(summary) {
            writeln!(out, "{}: {}", label, value)?;
        }

        Ok(())
    }

    fn write_product_insights(
        &self,
        products: &[ProductInsight],
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        write_section_header(out, "Product Insights:")?;
        writeln!(out)?;
        writeln!(out, "Top {} Products by Average Price:", products.len())?;
        writeln!(
            out,
            "{} {:>w$} {:>w$} {:>w$}",
            fit_column("Product", NAME_WIDTH),
            "Total_Sales",
            "Quantity",
            "Average_Price",
            w = NUMBER_WIDTH
        )?;

        for product in products {
            writeln!(
                out,
                "{} {:>w$} {:>w$} {:>w$}",
                fit_column(&product.product, NAME_WIDTH),
                format_amount(product.total_sales as f64),
                product.quantity,
                format_amount(product.average_price),
                w = NUMBER_WIDTH
            )?;
        }

        Ok(())
    }

    fn write_regional_insights(
        &self,
        regions: &[RegionInsight],
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        write_section_header(out, "Regional Insights:")?;
        writeln!(out)?;
        writeln!(out, "Regional Performance:")?;
        writeln!(
            out,
            "{} {:>w$} {:>w$}",
            fit_column("Region", NAME_WIDTH),
            "Total_Sales",
            "Quantity",
            w = NUMBER_WIDTH
        )?;

        for region in regions {
            writeln!(
                out,
                "{} {:>w$} {:>w$}",
                fit_column(&region.region, NAME_WIDTH),
                format_amount(region.total_sales as f64),
                region.quantity,
                w = NUMBER_WIDTH
            )?;
        }

        Ok(())
    }
}

impl ReportService for ReportServiceImpl {
    fn write_console_report(
        &self,
        analysis: &SalesAnalysis,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        self.write_summary(&analysis.summary, out)?;
        self.write_product_insights(&analysis.top_products_by_average_price, out)?;
        self.write_regional_insights(&analysis.regional_performance, out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dto::{group_total::*, payment_share::*};

    fn analysis() -> SalesAnalysis {
        SalesAnalysis::new(
            vec![GroupTotal::new("2023-01".to_string(), 1_250_000)],
            vec![GroupTotal::new("Laptop".to_string(), 1_250_000)],
            vec![GroupTotal::new("Nairobi".to_string(), 1_250_000)],
            vec![PaymentShare::new("M-Pesa".to_string(), 1_250_000, 100.0)],
            vec![GroupTotal::new("Electronics Store".to_string(), 1_250_000)],
            vec![ProductInsight::new(
                "Laptop".to_string(),
                1_250_000,
                12,
                1_250_000.0 / 12.0,
            )],
            vec![RegionInsight::new("Nairobi".to_string(), 1_250_000, 12)],
            Vec::new(),
            SalesSummary::new(
                1_250_000,
                416_666.666_666,
                12,
                "Laptop".to_string(),
                "Laptop".to_string(),
                "Nairobi".to_string(),
                "M-Pesa".to_string(),
                "Electronics Store".to_string(),
                6,
            ),
        )
    }

    fn render() -> String {
        let mut buffer: Vec<u8> = Vec::new();
        ReportServiceImpl::new()
            .write_console_report(&analysis(), &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn summary_formats_currency_and_counts() {
        let text = render();

        assert!(text.contains("Kenyan Market Sales Analysis Summary:"));
        assert!(text.contains("Total Revenue (KES): 1,250,000.00"));
        assert!(text.contains("Average Transaction Value (KES): 416,666.67"));
        assert!(text.contains("Total Units Sold: 12\n"));
        assert!(text.contains("Best Selling Product (by value): Laptop"));
        assert!(text.contains("Most Popular Payment Method: M-Pesa"));
        assert!(text.contains("Best Performing Store Type: Electronics Store"));
        assert!(text.contains("Peak Sales Month: 6 (June)"));
    }

    #[test]
    fn insight_tables_follow_summary() {
        let text = render();

        let summary_at = text.find("Kenyan Market Sales Analysis Summary:").unwrap();
        let products_at = text.find("Top 1 Products by Average Price:").unwrap();
        let regions_at = text.find("Regional Performance:").unwrap();
        assert!(summary_at < products_at && products_at < regions_at);

        let laptop_row = text
            .lines()
            .find(|l| l.starts_with("Laptop") && l.contains("104,166.67"))
            .unwrap();
        assert!(laptop_row.contains("1,250,000.00"));

        let nairobi_row = text
            .lines()
            .find(|l| l.starts_with("Nairobi"))
            .unwrap();
        assert!(nairobi_row.trim_end().ends_with("12"));
    }
}
