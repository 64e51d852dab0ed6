use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::Serialize;

use crate::{
    content::Catalog,
    error::{FolioError, Result},
};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "folio", "folio")
}

pub fn get_config_dir() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

pub fn get_state_dir() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        if let Some(state_dir) = proj_dirs.state_dir() {
            let dir = state_dir.to_path_buf();
            fs::create_dir_all(&dir).ok();
            return dir;
        }
    }
    PathBuf::from(".")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.json")
}

pub fn get_log_path() -> PathBuf {
    get_state_dir().join("folio.log")
}

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, &json)
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| FolioError::Content {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let catalog: Catalog = serde_json::from_str(&content).map_err(|e| FolioError::Content {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if catalog.categories.is_empty() {
        return Err(FolioError::Content {
            path: path.to_path_buf(),
            reason: "catalog declares no categories".to_string(),
        });
    }

    tracing::info!(
        path = %path.display(),
        categories = catalog.categories.len(),
        projects = catalog.projects.len(),
        "loaded content catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, time::SystemTime};

    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::content::builtin_catalog;

    fn unique_path(prefix: &str, extension: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}_{}.{}", prefix, now, extension))
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestJsonValue {
        name: String,
        count: usize,
    }

    #[test]
    fn test_json_helper_round_trip() {
        let path = unique_path("folio_json_roundtrip", "json");
        let value = TestJsonValue {
            name: "sample".to_string(),
            count: 3,
        };

        write_json_atomic(&path, &value).unwrap();
        let loaded: TestJsonValue =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, value);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_exported_catalog_loads_back() {
        let path = unique_path("folio_catalog", "json");
        let catalog = builtin_catalog();

        write_json_atomic(&path, &catalog).unwrap();
        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_catalog_rejects_missing_file() {
        let path = unique_path("folio_missing_catalog", "json");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, FolioError::Content { .. }));
    }

    #[test]
    fn test_load_catalog_rejects_empty_category_list() {
        let path = unique_path("folio_empty_catalog", "json");
        fs::write(&path, r#"{ "categories": [], "projects": [] }"#).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("no categories"));

        fs::remove_file(path).ok();
    }
}
