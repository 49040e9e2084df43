use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A single JSON document on disk holding a value of type `T`
///
/// Every read and write covers the whole document.
#[derive(Debug, Clone)]
pub struct JsonDocument<T> {
    path: PathBuf,
    _value: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _value: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, falling back to `T::default()`
    ///
    /// A missing document is created with the default value. A document
    /// that cannot be read or parsed is left on disk untouched and the
    /// default is returned for this call only.
    pub fn read(&self) -> T {
        if !self.path.exists() {
            let value = T::default();
            match self.write(&value) {
                Ok(()) => tracing::info!("Created empty document at {:?}", self.path),
                Err(e) => tracing::error!("Failed to create document {:?}: {}", self.path, e),
            }
            return value;
        }

        match self.try_read() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to read document {:?}: {}", self.path, e);
                T::default()
            }
        }
    }

    fn try_read(&self) -> Result<T> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Overwrite the document with `value`, pretty-printed
    pub fn write(&self, value: &T) -> Result<()> {
        let data = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, data).map_err(|e| {
            tracing::error!("Failed to write document {:?}: {}", self.path, e);
            e
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    type Doc = JsonDocument<BTreeMap<String, u64>>;

    #[test]
    fn test_read_missing_creates_default() {
        let temp_dir = TempDir::new().unwrap();
        let doc = Doc::new(temp_dir.path().join("doc.json"));

        assert!(doc.read().is_empty());
        assert!(doc.path().exists());
        assert_eq!(fs::read_to_string(doc.path()).unwrap(), "{}");
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let doc = Doc::new(temp_dir.path().join("doc.json"));

        let mut value = BTreeMap::new();
        value.insert("a".to_string(), 3);
        doc.write(&value).unwrap();

        assert_eq!(doc.read(), value);
    }

    #[test]
    fn test_corrupt_document_falls_back_without_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        fs::write(&path, "not json").unwrap();

        let doc = Doc::new(&path);

        assert!(doc.read().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let doc = Doc::new(temp_dir.path().join("nope").join("doc.json"));

        assert!(doc.write(&BTreeMap::new()).is_err());
        // Read still answers with the in-memory default
        assert!(doc.read().is_empty());
    }
}
