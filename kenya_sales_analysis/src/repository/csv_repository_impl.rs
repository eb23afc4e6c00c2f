use crate::common::*;

use crate::model::sales::{sales_dataset::*, sales_record::*};

use crate::traits::repository_traits::sales_repository::*;

use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct CsvRepositoryImpl {
    delimiter: u8,
}

impl Default for CsvRepositoryImpl {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl CsvRepositoryImpl {
    #[doc = "Serializes every record into `path`, header row first."]
    fn write_records(delimiter: u8, records: &[SalesRecord], path: &Path) -> anyhow::Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_path(path)
            .with_context(|| {
                format!("[CsvRepositoryImpl->write_records] Failed to create {:?}", path)
            })?;

        if records.is_empty() {
            writer.write_record(CSV_HEADERS)?;
        }

        for record in records {
            writer.serialize(record)?;
        }

        writer
            .flush()
            .with_context(|| format!("[CsvRepositoryImpl->write_records] Failed to flush {:?}", path))?;

        Ok(())
    }

    #[doc = r#"
        Writes into a sibling `.tmp` file and renames it over `path` once complete,
        so the target is either the previous snapshot or the full new one.
    "#]
    fn write_snapshot(delimiter: u8, records: &[SalesRecord], path: &Path) -> anyhow::Result<()> {
        ensure_parent_dir(path)?;
        let tmp_path: PathBuf = temp_path_for(path);

        if let Err(e) = Self::write_records(delimiter, records, &tmp_path) {
            if let Err(remove_err) = fs::remove_file(&tmp_path) {
                warn!(
                    "[CsvRepositoryImpl->write_snapshot] Failed to remove {:?}: {:?}",
                    tmp_path, remove_err
                );
            }
            return Err(e);
        }

        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "[CsvRepositoryImpl->write_snapshot] Failed to move {:?} to {:?}",
                tmp_path, path
            )
        })?;

        Ok(())
    }

    fn read_snapshot(delimiter: u8, path: &Path) -> anyhow::Result<SalesDataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("[CsvRepositoryImpl->read_snapshot] Failed to open {:?}", path))?;

        let mut records: Vec<SalesRecord> = Vec::new();

        for (row, result) in reader.deserialize::<SalesRecord>().enumerate() {
            let record: SalesRecord = result.with_context(|| {
                format!(
                    "[CsvRepositoryImpl->read_snapshot] Malformed row {} in {:?}",
                    row, path
                )
            })?;
            records.push(record);
        }

        let dataset: SalesDataset = SalesDataset::new(records);
        dataset.verify_totals()?;

        Ok(dataset)
    }
}

#[async_trait]
impl SalesRepository for CsvRepositoryImpl {
    async fn save_dataset(&self, dataset: &SalesDataset, path: &Path) -> anyhow::Result<()> {
        let delimiter: u8 = self.delimiter;
        let records: Vec<SalesRecord> = dataset.records().clone();
        let target: PathBuf = path.to_path_buf();

        let handle: tokio::task::JoinHandle<anyhow::Result<()>> =
            tokio::task::spawn_blocking(move || Self::write_snapshot(delimiter, &records, &target));

        handle
            .await
            .context("[CsvRepositoryImpl->save_dataset] blocking task join failed (panic/cancelled)")??;

        info!("Saved {} sales records to {:?}", dataset.len(), path);

        Ok(())
    }

    async fn load_dataset(&self, path: &Path) -> anyhow::Result<SalesDataset> {
        let delimiter: u8 = self.delimiter;
        let source: PathBuf = path.to_path_buf();

        let dataset: SalesDataset = tokio::task::spawn_blocking(move || {
            Self::read_snapshot(delimiter, &source)
        })
        .await
        .context("[CsvRepositoryImpl->load_dataset] blocking task join failed (panic/cancelled)")??;

        info!("Loaded {} sales records from {:?}", dataset.len(), path);

        Ok(dataset)
    }
}
