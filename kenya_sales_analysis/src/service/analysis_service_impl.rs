use crate::common::*;

use crate::dto::{
    group_total::*, monthly_average::*, payment_share::*, product_insight::*, region_insight::*,
    sales_analysis::*, sales_summary::*,
};

use crate::enums::sort_order::*;

use crate::model::sales::{sales_accumulator::*, sales_dataset::*, sales_record::*};

use crate::traits::service_traits::analysis_service::*;

use crate::utils_modules::{group_utils::*, time_utils::*};

#[derive(Debug, Clone, Default, new)]
pub struct AnalysisServiceImpl;

impl AnalysisServiceImpl {
    #[doc = "Groups the dataset by `key_fn`, accumulating sales, units and row count per key."]
    fn group_sales<K, F>(&self, dataset: &SalesDataset, key_fn: F) -> BTreeMap<K, SalesAccumulator>
    where
        K: Ord,
        F: Fn(&SalesRecord) -> K,
    {
        group_by_reduce(
            dataset.records(),
            key_fn,
            SalesAccumulator::default,
            |acc: &mut SalesAccumulator, record: &SalesRecord| acc.add(record),
        )
    }

    fn to_group_totals(groups: BTreeMap<String, SalesAccumulator>) -> Vec<GroupTotal> {
        groups
            .into_iter()
            .map(|(key, acc)| GroupTotal::new(key, acc.total_sales))
            .collect()
    }

    #[doc = "Key with the largest metric; the lowest key wins ties."]
    fn max_key<K, M, F>(
        groups: &BTreeMap<K, SalesAccumulator>,
        metric: F,
        label: &str,
    ) -> anyhow::Result<K>
    where
        K: Clone,
        M: PartialOrd,
        F: Fn(&SalesAccumulator) -> M,
    {
        max_entry_by(groups.iter(), |entry| metric(entry.1))
            .map(|(key, _)| key.clone())
            .ok_or_else(|| {
                anyhow!(
                    "[AnalysisServiceImpl->max_key] No groups to select '{}' from",
                    label
                )
            })
    }
}

impl AnalysisService for AnalysisServiceImpl {
    fn monthly_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal> {
        Self::to_group_totals(self.group_sales(dataset, |r| month_key(r.date)))
    }

    fn product_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal> {
        let mut product_sales: Vec<GroupTotal> =
            Self::to_group_totals(self.group_sales(dataset, |r| r.product.clone()));
        sort_by_metric(&mut product_sales, SortOrder::Desc, |g| g.total_sales);

        product_sales
    }

    fn regional_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal> {
        Self::to_group_totals(self.group_sales(dataset, |r| r.region.clone()))
    }

    fn payment_method_shares(&self, dataset: &SalesDataset) -> Vec<PaymentShare> {
        let grand_total: i64 = dataset.total_sales();

        self.group_sales(dataset, |r| r.payment_method.clone())
            .into_iter()
            .map(|(payment_method, acc)| {
                let share_percent: f64 = if grand_total == 0 {
                    0.0
                } else {
                    acc.total_sales as f64 / grand_total as f64 * 100.0
                };
                PaymentShare::new(payment_method, acc.total_sales, share_percent)
            })
            .collect()
    }

    fn store_type_sales(&self, dataset: &SalesDataset) -> Vec<GroupTotal> {
        Self::to_group_totals(self.group_sales(dataset, |r| r.store_type.clone()))
    }

    fn top_products_by_average_price(
        &self,
        dataset: &SalesDataset,
        limit: usize,
    ) -> Vec<ProductInsight> {
        let mut insights: Vec<ProductInsight> = self
            .group_sales(dataset, |r| r.product.clone())
            .into_iter()
            .filter_map(|(product, acc)| {
                acc.average_price().map(|average_price| {
                    ProductInsight::new(product, acc.total_sales, acc.quantity, average_price)
                })
            })
            .collect();

        sort_by_metric(&mut insights, SortOrder::Desc, |p| p.average_price);
        insights.truncate(limit);

        insights
    }

    fn regional_performance(&self, dataset: &SalesDataset) -> Vec<RegionInsight> {
        let mut insights: Vec<RegionInsight> = self
            .group_sales(dataset, |r| r.region.clone())
            .into_iter()
            .map(|(region, acc)| RegionInsight::new(region, acc.total_sales, acc.quantity))
            .collect();

        sort_by_metric(&mut insights, SortOrder::Desc, |r| r.total_sales);

        insights
    }

    fn monthly_average_sales(&self, dataset: &SalesDataset) -> Vec<MonthlyAverage> {
        self.group_sales(dataset, |r| month_of_year(r.date))
            .into_iter()
            .filter_map(|(month, acc)| {
                acc.mean_sales()
                    .map(|average_sales| MonthlyAverage::new(month, average_sales))
            })
            .collect()
    }

    fn summarize(&self, dataset: &SalesDataset) -> anyhow::Result<SalesSummary> {
        dataset.ensure_not_empty("AnalysisServiceImpl->summarize")?;

        let total_revenue: i64 = dataset.total_sales();
        let average_transaction_value: f64 = total_revenue as f64 / dataset.len() as f64;
        let total_units_sold: i64 = dataset.total_quantity();

        let by_product = self.group_sales(dataset, |r| r.product.clone());
        let by_region = self.group_sales(dataset, |r| r.region.clone());
        let by_payment = self.group_sales(dataset, |r| r.payment_method.clone());
        let by_store_type = self.group_sales(dataset, |r| r.store_type.clone());
        let by_month_of_year = self.group_sales(dataset, |r| month_of_year(r.date));

        let peak_sales_month: u32 = Self::max_key(
            &by_month_of_year,
            |acc| acc.mean_sales().unwrap_or(f64::MIN),
            "peak sales month",
        )?;

        Ok(SalesSummary::new(
            total_revenue,
            average_transaction_value,
            total_units_sold,
            Self::max_key(&by_product, |acc| acc.total_sales, "best product by value")?,
            Self::max_key(&by_product, |acc| acc.quantity, "best product by volume")?,
            Self::max_key(&by_region, |acc| acc.total_sales, "top region")?,
            Self::max_key(&by_payment, |acc| acc.total_sales, "top payment method")?,
            Self::max_key(&by_store_type, |acc| acc.total_sales, "top store type")?,
            peak_sales_month,
        ))
    }

    fn analyze(
        &self,
        dataset: &SalesDataset,
        top_product_limit: usize,
    ) -> anyhow::Result<SalesAnalysis> {
        dataset.ensure_not_empty("AnalysisServiceImpl->analyze")?;

        let summary: SalesSummary = self.summarize(dataset)?;

        Ok(SalesAnalysis::new(
            self.monthly_sales(dataset),
            self.product_sales(dataset),
            self.regional_sales(dataset),
            self.payment_method_shares(dataset),
            self.store_type_sales(dataset),
            self.top_products_by_average_price(dataset, top_product_limit),
            self.regional_performance(dataset),
            self.monthly_average_sales(dataset),
            summary,
        ))
    }
}
