use crate::common::*;

use crate::model::sales::sales_dataset::*;

#[async_trait]
pub trait SalesRepository: Send + Sync {
    #[doc = "Writes the full dataset as a snapshot at `path`, replacing any existing file."]
    async fn save_dataset(&self, dataset: &SalesDataset, path: &Path) -> anyhow::Result<()>;
    #[doc = "Reads a snapshot written by `save_dataset`."]
    async fn load_dataset(&self, path: &Path) -> anyhow::Result<SalesDataset>;
}
