use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::{AppError, AppResult};
use crate::models::Todo;

pub const DEFAULT_DATA_FILE: &str = "todolists.json";

// Owns the backing file. No caching: every call goes to disk.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole collection.
    ///
    /// - absent file: created with `[]`, returns empty
    /// - zero-length file: returns empty without parsing
    /// - anything else must be a JSON array of todos
    pub fn load(&self) -> AppResult<Vec<Todo>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "data file missing, creating it");
                self.save(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if text.is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "data file is corrupt");
            AppError::Persistence {
                path: self.path.clone(),
                source,
            }
        })
    }

    // Overwrites the file in place. A crash mid-write can truncate it.
    pub fn save(&self, todos: &[Todo]) -> AppResult<()> {
        let text = serde_json::to_string(todos).map_err(io::Error::from)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, title: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            completed: false,
        }
    }

    #[test]
    fn load_creates_missing_file_with_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        let store = Store::new(&path);

        assert!(store.load().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn load_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("todos.json");
        let store = Store::new(&path);

        assert!(store.load().unwrap().is_empty());
        assert!(path.exists());
    }

    #[test]
    fn load_empty_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, "").unwrap();

        assert!(Store::new(&path).load().unwrap().is_empty());
        // Left untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn load_corrupt_file_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, "[{not json").unwrap();

        let err = Store::new(&path).load().unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
        // The corrupt content is not replaced.
        assert_eq!(fs::read_to_string(&path).unwrap(), "[{not json");
    }

    #[test]
    fn load_rejects_non_array_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, r#"{"id":"1"}"#).unwrap();

        let err = Store::new(&path).load().unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
    }

    #[test]
    fn save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("todos.json"));
        let todos = vec![todo("b", "second"), todo("a", "first"), todo("c", "third")];

        store.save(&todos).unwrap();
        assert_eq!(store.load().unwrap(), todos);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("todos.json"));

        store.save(&[todo("1", "a"), todo("2", "b")]).unwrap();
        store.save(&[todo("3", "c")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "3");
    }

    #[test]
    fn load_accepts_records_with_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, r#"[{"completed":false,"id":"1"}]"#).unwrap();

        let loaded = Store::new(&path).load().unwrap();
        assert_eq!(loaded, vec![todo("1", "")]);
    }
}
