use crate::common::*;

use crate::model::{
    catalog::{product_price::*, sales_catalog::*},
    configs::generator_config::*,
    sales::{sales_dataset::*, sales_record::*},
};

use crate::traits::service_traits::generator_service::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct GeneratorServiceImpl {
    generator_config: GeneratorConfig,
    catalog: SalesCatalog,
}

impl GeneratorServiceImpl {
    #[doc = "Draws `count` values uniformly from `values`, one after another."]
    fn sample_column<'a, T>(
        rng: &mut StdRng,
        values: &'a [T],
        count: usize,
        column: &str,
    ) -> anyhow::Result<Vec<&'a T>> {
        (0..count)
            .map(|_| {
                values.choose(&mut *rng).ok_or_else(|| {
                    anyhow!(
                        "[GeneratorServiceImpl->sample_column] No values to draw '{}' from",
                        column
                    )
                })
            })
            .collect()
    }

    #[doc = "Uniform draw from the inclusive price range, rounded to the nearest unit (ties to even)."]
    fn sample_unit_price(rng: &mut StdRng, product: &ProductPrice) -> i64 {
        let min_price: f64 = product.min_price as f64;
        let max_price: f64 = product.max_price as f64;
        let raw: f64 = rng.gen_range(min_price..=max_price);

        (raw.round_ties_even() as i64).clamp(product.min_price, product.max_price)
    }
}

impl GeneratorService for GeneratorServiceImpl {
    fn generate_sales_dataset(&self) -> anyhow::Result<SalesDataset> {
        self.generator_config.validate()?;
        self.catalog.validate()?;

        let record_count: usize = self.generator_config.record_count;
        let mut rng: StdRng = StdRng::seed_from_u64(self.generator_config.seed);

        /* 1. Dates: start_date + i days */
        let dates: Vec<NaiveDate> = (0..record_count as u64)
            .map(|offset| add_days(self.generator_config.start_date, offset))
            .collect::<anyhow::Result<_>>()?;

        /* 2. Categorical columns and quantities, one column at a time */
        let products: Vec<&ProductPrice> =
            Self::sample_column(&mut rng, &self.catalog.products, record_count, "product")?;
        let regions: Vec<&String> =
            Self::sample_column(&mut rng, &self.catalog.regions, record_count, "region")?;
        let store_types: Vec<&String> =
            Self::sample_column(&mut rng, &self.catalog.store_types, record_count, "store_type")?;
        let payment_methods: Vec<&String> = Self::sample_column(
            &mut rng,
            &self.catalog.payment_methods,
            record_count,
            "payment_method",
        )?;
        let quantities: Vec<i64> = (0..record_count).map(|_| rng.gen_range(1..20)).collect();

        /* 3. Unit prices from each row's product range */
        let unit_prices: Vec<i64> = products
            .iter()
            .map(|product| Self::sample_unit_price(&mut rng, product))
            .collect();

        /* 4. Assemble rows */
        let mut records: Vec<SalesRecord> = Vec::with_capacity(record_count);

        for i in 0..record_count {
            let total_sales: i64 = quantities[i].checked_mul(unit_prices[i]).ok_or_else(|| {
                anyhow!(
                    "[GeneratorServiceImpl->generate_sales_dataset] total_sales overflow at row {}",
                    i
                )
            })?;

            records.push(SalesRecord::new(
                dates[i],
                products[i].name.clone(),
                regions[i].clone(),
                store_types[i].clone(),
                payment_methods[i].clone(),
                quantities[i],
                unit_prices[i],
                total_sales,
            ));
        }

        info!(
            "Generated {} sales records (seed={}, start_date={})",
            records.len(),
            self.generator_config.seed,
            self.generator_config.start_date
        );

        Ok(SalesDataset::new(records))
    }
}
