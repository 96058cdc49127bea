use crate::domain::errors::DomainError;
use crate::infrastructure::logging::logger;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tokio::fs::{self as tokio_fs, create_dir_all, read_to_string};

/// Represents the on-disk layout under the application root
pub struct DataDirectory {
    root: PathBuf,
    config_dir: PathBuf,
    data_dir: PathBuf,
    logs: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        let config_dir = root.join("config");
        let data_dir = root.join("data");
        let logs = root.join("logs");

        Self {
            root,
            config_dir,
            data_dir,
            logs,
        }
    }

    /// Initialize the data directory structure
    pub async fn initialize(&self) -> Result<(), DomainError> {
        tracing::info!("Initializing data directory at: {:?}", self.root);

        for dir in [&self.root, &self.config_dir, &self.data_dir, &self.logs] {
            self.create_directory(dir).await?;
        }

        Ok(())
    }

    /// Create a directory if it doesn't exist
    async fn create_directory(&self, path: &Path) -> Result<(), DomainError> {
        if !path.exists() {
            tracing::info!("Creating directory: {:?}", path);
            create_dir_all(path).await.map_err(|e| {
                tracing::error!("Failed to create directory {:?}: {}", path, e);
                DomainError::InternalError(format!("Failed to create directory: {}", e))
            })?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `config/config.json`
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Path of `data/characters.json`
    pub fn characters_file(&self) -> PathBuf {
        self.data_dir.join("characters.json")
    }

    pub fn logs(&self) -> &Path {
        &self.logs
    }
}

/// Read a JSON file and deserialize it
///
/// A missing file maps to `DomainError::NotFound`, unparsable content to
/// `DomainError::InvalidData`, so callers can decide which failures to tolerate.
pub async fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    logger::debug(&format!("Reading JSON file: {:?}", path));

    let contents = read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DomainError::NotFound(format!("File not found: {}", path.display()))
        } else {
            logger::error(&format!("Failed to read file {:?}: {}", path, e));
            DomainError::InternalError(format!("Failed to read file: {}", e))
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        logger::error(&format!("Failed to parse JSON from file {:?}: {}", path, e));
        DomainError::InvalidData(format!("Invalid JSON: {}", e))
    })
}

/// Write a JSON file
///
/// Serializes the whole value and replaces the file contents in one write.
pub async fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), DomainError> {
    logger::debug(&format!("Writing JSON file: {:?}", path));

    if let Some(parent) = path.parent() {
        create_dir_all(parent).await.map_err(|e| {
            logger::error(&format!(
                "Failed to create parent directory for {:?}: {}",
                path, e
            ));
            DomainError::InternalError(format!("Failed to create directory: {}", e))
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| {
        logger::error(&format!(
            "Failed to serialize to JSON for file {:?}: {}",
            path, e
        ));
        DomainError::InvalidData(format!("Failed to serialize to JSON: {}", e))
    })?;

    tokio_fs::write(path, json).await.map_err(|e| {
        logger::error(&format!("Failed to write to file {:?}: {}", path, e));
        DomainError::InternalError(format!("Failed to write to file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;
    use serde_json::{Value, json};

    fn unique_temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("wowtracker-file-system-{}", random::<u64>()))
    }

    #[tokio::test]
    async fn initialize_creates_config_and_data_directories() {
        let root = unique_temp_root();
        let data_directory = DataDirectory::new(root.clone());

        data_directory.initialize().await.expect("initialize");

        assert!(root.join("config").is_dir());
        assert!(root.join("data").is_dir());
        assert!(data_directory.logs().is_dir());
        assert_eq!(data_directory.config_file(), root.join("config").join("config.json"));
        assert_eq!(
            data_directory.characters_file(),
            root.join("data").join("characters.json")
        );

        let _ = tokio_fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn write_creates_parent_directories_and_read_returns_value() {
        let root = unique_temp_root();
        let path = root.join("nested").join("value.json");

        write_json_file(&path, &json!({"realm": "Area-52"}))
            .await
            .expect("write json");
        let value: Value = read_json_file(&path).await.expect("read json");

        assert_eq!(value["realm"], "Area-52");

        let _ = tokio_fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn read_distinguishes_missing_from_corrupt_files() {
        let root = unique_temp_root();
        let missing = read_json_file::<Value>(&root.join("missing.json")).await;
        assert!(matches!(missing, Err(DomainError::NotFound(_))));

        let corrupt = root.join("corrupt.json");
        tokio_fs::create_dir_all(&root).await.expect("create root");
        tokio_fs::write(&corrupt, "{not json").await.expect("write corrupt");
        let parsed = read_json_file::<Value>(&corrupt).await;
        assert!(matches!(parsed, Err(DomainError::InvalidData(_))));

        let _ = tokio_fs::remove_dir_all(&root).await;
    }
}
