use crate::common::*;

const DEFAULT_SALES_CONFIG_PATH: &str = "./config/sales_config.toml";

#[doc = "Reads `key` from the environment, falling back to `default` when it is unset."]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            info!("'{}' is not set. Using default '{}'", key, default);
            default.to_string()
        }
    }
}

#[doc = r#"
    Path of the TOML file holding the generator settings, the catalog and the output settings.
    Read from `SALES_CONFIG_PATH` on first access.
"#]
pub static SALES_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("SALES_CONFIG_PATH", DEFAULT_SALES_CONFIG_PATH));
