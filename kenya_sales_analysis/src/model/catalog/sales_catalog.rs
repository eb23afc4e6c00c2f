use crate::common::*;

use crate::model::catalog::product_price::*;

const KENYAN_PRODUCTS: [(&str, i64, i64); 17] = [
    /* Electronics */
    ("Smartphone", 15000, 120000),
    ("Laptop", 35000, 180000),
    ("TV", 15000, 150000),
    ("Radio", 2000, 8000),
    /* Home appliances */
    ("Refrigerator", 25000, 120000),
    ("Microwave", 8000, 35000),
    ("Water Dispenser", 5000, 25000),
    /* Household items */
    ("Gas Cooker", 3000, 45000),
    ("Electric Kettle", 1500, 5000),
    ("Iron Box", 1000, 4500),
    /* Groceries */
    ("Cooking Oil (5L)", 800, 1500),
    ("Maize Flour (2kg)", 150, 250),
    ("Rice (2kg)", 200, 400),
    ("Sugar (2kg)", 200, 300),
    /* Personal care */
    ("Body Lotion", 200, 1000),
    ("Shower Gel", 150, 800),
    ("Toothpaste", 100, 300),
];

const KENYAN_REGIONS: [&str; 6] = ["Nairobi", "Mombasa", "Kisumu", "Nakuru", "Eldoret", "Nyeri"];

const KENYAN_STORE_TYPES: [&str; 4] = [
    "Supermarket",
    "Wholesale Shop",
    "Mini Market",
    "Electronics Store",
];

const KENYAN_PAYMENT_METHODS: [&str; 4] = ["M-Pesa", "Cash", "Credit Card", "Bank Transfer"];

#[doc = r#"
    Fixed value sets every generated transaction draws from.

    The catalog is plain configuration data handed to the generator, so tests can
    run against a two-product catalog while the real run uses the Kenyan one.

    # Fields
    * `products` - products with their unit price ranges, in catalog order
    * `regions` - store locations
    * `store_types` - store formats
    * `payment_methods` - accepted payment channels
"#]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct SalesCatalog {
    pub products: Vec<ProductPrice>,
    pub regions: Vec<String>,
    pub store_types: Vec<String>,
    pub payment_methods: Vec<String>,
}

impl Default for SalesCatalog {
    fn default() -> Self {
        let to_strings = |values: &[&str]| -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        };

        Self {
            products: KENYAN_PRODUCTS
                .iter()
                .map(|(name, min_price, max_price)| {
                    ProductPrice::new(name.to_string(), *min_price, *max_price)
                })
                .collect(),
            regions: to_strings(&KENYAN_REGIONS[..]),
            store_types: to_strings(&KENYAN_STORE_TYPES[..]),
            payment_methods: to_strings(&KENYAN_PAYMENT_METHODS[..]),
        }
    }
}

#[cfg(test)]
impl SalesCatalog {
    pub fn find_product(&self, name: &str) -> Option<&ProductPrice> {
        self.products.iter().find(|p| p.name == name)
    }
}

impl SalesCatalog {
    #[doc = "Every list must be non-empty and every price range must satisfy `min_price <= max_price`."]
    pub fn validate(&self) -> anyhow::Result<()> {
        let lists: [(&str, usize); 4] = [
            ("products", self.products.len()),
            ("regions", self.regions.len()),
            ("store_types", self.store_types.len()),
            ("payment_methods", self.payment_methods.len()),
        ];

        if let Some((name, _)) = lists.iter().find(|(_, len)| *len == 0) {
            return Err(anyhow!(
                "[SalesCatalog->validate] Catalog list '{}' must not be empty",
                name
            ));
        }

        if let Some(product) = self.products.iter().find(|p| p.min_price > p.max_price) {
            return Err(anyhow!(
                "[SalesCatalog->validate] Invalid price range for '{}': {} > {}",
                product.name,
                product.min_price,
                product.max_price
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_the_kenyan_one() {
        let catalog = SalesCatalog::default();
        assert_eq!(catalog.products().len(), 17);
        assert_eq!(catalog.regions().len(), 6);
        assert_eq!(catalog.store_types().len(), 4);
        assert_eq!(catalog.payment_methods().len(), 4);
        assert!(catalog.validate().is_ok());

        let laptop = catalog.find_product("Laptop").unwrap();
        assert_eq!((laptop.min_price, laptop.max_price), (35000, 180000));
    }

    #[test]
    fn empty_list_is_rejected() {
        let mut catalog = SalesCatalog::default();
        catalog.regions.clear();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("regions"));
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let mut catalog = SalesCatalog::default();
        catalog.products[0].min_price = 500_000;
        assert!(catalog.validate().is_err());
    }
}
