#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    MonthlySalesTrend,
    ProductSales,
    RegionalSales,
    PaymentMethods,
    StoreTypeSales,
}

pub const ALL_CHART_KINDS: [ChartKind; 5] = [
    ChartKind::MonthlySalesTrend,
    ChartKind::ProductSales,
    ChartKind::RegionalSales,
    ChartKind::PaymentMethods,
    ChartKind::StoreTypeSales,
];

pub fn get_file_name(chart_kind: ChartKind) -> &'static str {
    match chart_kind {
        ChartKind::MonthlySalesTrend => "kenya_monthly_sales_trend.png",
        ChartKind::ProductSales => "kenya_product_sales.png",
        ChartKind::RegionalSales => "kenya_regional_sales.png",
        ChartKind::PaymentMethods => "kenya_payment_methods.png",
        ChartKind::StoreTypeSales => "kenya_store_type_sales.png",
    }
}

pub fn get_title(chart_kind: ChartKind) -> &'static str {
    match chart_kind {
        ChartKind::MonthlySalesTrend => "Monthly Sales Trend (Thousands KES)",
        ChartKind::ProductSales => "Total Sales by Product",
        ChartKind::RegionalSales => "Sales by Region",
        ChartKind::PaymentMethods => "Sales Distribution by Payment Method",
        ChartKind::StoreTypeSales => "Sales by Store Type",
    }
}
