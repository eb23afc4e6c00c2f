use crate::common::*;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_RECORD_COUNT: usize = 1000;

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

#[doc = r#"
    Settings of one generation run.

    # Fields
    * `seed` - seed of the pseudo-random source; equal seeds give identical datasets
    * `record_count` - number of transactions to generate, must be positive
    * `start_date` - date of the first transaction; row `i` is dated `start_date + i` days
"#]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub record_count: usize,
    pub start_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            record_count: DEFAULT_RECORD_COUNT,
            start_date: default_start_date(),
        }
    }
}

#[cfg(test)]
impl GeneratorConfig {
    #[doc = "Default settings with a different row count."]
    pub fn with_record_count(record_count: usize) -> Self {
        Self {
            record_count,
            ..Self::default()
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.record_count == 0 {
            return Err(anyhow!(
                "[GeneratorConfig->validate] record_count must be positive, got {}",
                self.record_count
            ));
        }

        Ok(())
    }
}
