use crate::common::*;

use crate::model::{
    catalog::sales_catalog::*,
    configs::{generator_config::*, output_config::*},
};

use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub generator: GeneratorConfig,
    pub catalog: SalesCatalog,
    pub output: OutputConfig,
}

impl TotalConfig {
    #[doc = r#"
        Loads the run configuration from `config_path`.

        A missing file means "use the built-in defaults"; a file that exists but
        cannot be parsed, or that describes an invalid catalog or row count, is an error.
    "#]
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let config: TotalConfig = if Path::new(config_path).exists() {
            info!("Loading sales configuration from {}", config_path);
            read_toml_from_file::<TotalConfig>(config_path)?
        } else {
            warn!(
                "[TotalConfig->load] '{}' not found. Falling back to default configuration.",
                config_path
            );
            TotalConfig::default()
        };

        config.generator.validate()?;
        config.catalog.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = TotalConfig::load("./no/such/sales_config.toml").unwrap();
        assert_eq!(*config.generator().record_count(), 1000);
        assert_eq!(config.catalog().products().len(), 17);
        assert_eq!(*config.output().top_product_limit(), 5);
    }

    #[test]
    fn file_overrides_only_named_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales_config.toml");
        fs::write(
            &path,
            "[generator]\nrecord_count = 30\n\n[catalog]\nregions = [\"Nairobi\"]\n",
        )
        .unwrap();

        let config = TotalConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(*config.generator().record_count(), 30);
        assert_eq!(*config.generator().seed(), 42);
        assert_eq!(config.catalog().regions(), &vec!["Nairobi".to_string()]);
        assert_eq!(config.catalog().payment_methods().len(), 4);
    }

    #[test]
    fn zero_record_count_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales_config.toml");
        fs::write(&path, "[generator]\nrecord_count = 0\n").unwrap();

        assert!(TotalConfig::load(path.to_str().unwrap()).is_err());
    }
}
