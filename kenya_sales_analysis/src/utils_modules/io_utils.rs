use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into the requested configuration type.

    # Arguments
    * `file_path` - path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - the parsed structure

    # Errors
    - the file does not exist or cannot be read
    - the content is not valid TOML or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] Failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = "Creates the parent directory of `path` when it is missing."]
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("[ensure_parent_dir] Failed to create directory {:?}", parent)
            })?;
        }
    }

    Ok(())
}

#[doc = "Sibling path used while a snapshot is being written, e.g. `data.csv` -> `data.csv.tmp`."]
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
