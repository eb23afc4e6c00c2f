use crate::common::*;

use crate::enums::chart_kind::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub data_file: String,
    pub top_product_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            data_file: "kenya_sales_data.csv".to_string(),
            top_product_limit: 5,
        }
    }
}

impl OutputConfig {
    pub fn data_path(&self) -> PathBuf {
        self.output_dir.join(&self.data_file)
    }

    pub fn chart_path(&self, chart_kind: ChartKind) -> PathBuf {
        self.output_dir.join(get_file_name(chart_kind))
    }
}
