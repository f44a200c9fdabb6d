use crate::errors::{AppError, AppResult};
use crate::remote::RemoteStore;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed document store: one pretty-printed JSON file per
/// document under `<root>/<user_id>/<collection>/<id>.json`.
///
/// The root directory must already exist; a missing root is treated as an
/// unreachable remote so callers can fall back to local data.
pub struct JsonDirStore {
    root: PathBuf,
    user_id: String,
}

impl JsonDirStore {
    pub fn new(root: impl Into<PathBuf>, user_id: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            user_id: user_id.into(),
        }
    }

    fn ensure_reachable(&self) -> AppResult<()> {
        if !self.root.is_dir() {
            return Err(AppError::Remote(format!(
                "remote root not reachable: {}",
                self.root.display()
            )));
        }
        Ok(())
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(&self.user_id).join(collection)
    }

    fn doc_path(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{id}.json"))
    }
}

impl RemoteStore for JsonDirStore {
    fn put(&self, collection: &str, id: &str, document: &Value) -> AppResult<()> {
        self.ensure_reachable()?;

        let dir = self.collection_dir(collection);
        fs::create_dir_all(&dir)?;

        let body = serde_json::to_string_pretty(document)
            .map_err(|e| AppError::Remote(format!("serialize document {id}: {e}")))?;

        // Write-then-rename so readers never observe a half-written document.
        let tmp = dir.join(format!(".{id}.json.tmp"));
        fs::write(&tmp, body)?;
        fs::rename(&tmp, self.doc_path(collection, id))?;
        Ok(())
    }

    fn get_all(&self, collection: &str) -> AppResult<Vec<Value>> {
        self.ensure_reachable()?;

        let dir = self.collection_dir(collection);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for dirent in fs::read_dir(&dir)? {
            let path = dirent?.path();
            if !is_document(&path) {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let doc: Value = serde_json::from_str(&content).map_err(|e| {
                AppError::Remote(format!("corrupt document {}: {e}", path.display()))
            })?;
            out.push(doc);
        }
        Ok(out)
    }

    fn list_ids(&self, collection: &str) -> AppResult<Vec<String>> {
        self.ensure_reachable()?;

        let dir = self.collection_dir(collection);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for dirent in fs::read_dir(&dir)? {
            let path = dirent?.path();
            if !is_document(&path) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                out.push(stem.to_string());
            }
        }
        Ok(out)
    }

    fn delete(&self, collection: &str, id: &str) -> AppResult<()> {
        self.ensure_reachable()?;

        let path = self.doc_path(collection, id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_document(path: &Path) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return false;
    }
    // Skip in-flight temp files.
    !path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::WORKLOGS;
    use serde_json::json;

    #[test]
    fn put_is_idempotent_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonDirStore::new(tmp.path(), "user-1");

        let doc = json!({"id": "abc", "hours": 8.0});
        store.put(WORKLOGS, "abc", &doc).unwrap();
        store.put(WORKLOGS, "abc", &doc).unwrap();

        assert_eq!(store.get_all(WORKLOGS).unwrap().len(), 1);
        assert_eq!(store.list_ids(WORKLOGS).unwrap(), vec!["abc".to_string()]);
    }

    #[test]
    fn missing_root_is_unreachable() {
        let store = JsonDirStore::new("/nonexistent/remote/root", "user-1");
        assert!(store.put(WORKLOGS, "x", &json!({})).is_err());
        assert!(store.get_all(WORKLOGS).is_err());
    }

    #[test]
    fn delete_absent_id_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonDirStore::new(tmp.path(), "user-1");
        store.delete(WORKLOGS, "never-written").unwrap();
    }
}
