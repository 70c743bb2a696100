use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "dewit";
/// Full path override for the database file.
pub const DB_PATH_ENV: &str = "DEWIT_DB";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let home = var("HOME").or_else(|_| var("USERPROFILE")).unwrap_or_else(|_| ".".into());
        let base_path = Path::new(&home).join(".config").join(APP_NAME);

        Self { base_path }
    }

    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// `DEWIT_DB` when set and non-empty, otherwise `file_name` under the base path.
    pub fn db_path(&self, file_name: &str) -> io::Result<PathBuf> {
        match var(DB_PATH_ENV).ok().filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                let path = PathBuf::from(path);
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                Ok(path)
            }
            None => self.get_path(file_name),
        }
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
