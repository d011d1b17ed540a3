//! Repository adapters for reference data

use std::path::Path;

use chute_domain::repository::{BuiltinReferenceData, ReferenceDataRepository};
use chute_domain::Catalog;
use chute_infra::persistence::FileReferenceDataRepository;
use chute_types::Result;

use crate::config::Config;

/// Open the catalog named by the config, or the built-in one
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    open_catalog_at(config.reference_data.as_deref())
}

/// Open a catalog from a data file, or the built-in one when `path` is None
pub fn open_catalog_at(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            log::debug!("opening reference data at {}", path.display());
            FileReferenceDataRepository::new(path.to_path_buf())?.load_catalog()
        }
        None => BuiltinReferenceData.load_catalog(),
    }
}

/// Read a catalog without validating it, for reporting its issues
pub fn read_catalog_at(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => FileReferenceDataRepository::new(path.to_path_buf())?.read_catalog(),
        None => BuiltinReferenceData.read_catalog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_opens_builtin() {
        let catalog = open_catalog(&Config::default()).unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_config_path_is_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.json");
        std::fs::write(
            &path,
            r#"{"canopies": [{"size": 46.0, "max_wind_closed": 10.0, "max_wind_open": 12.0, "min_weight": 200.0, "max_weight": 650.0}]}"#,
        )
        .unwrap();

        let config = Config {
            reference_data: Some(path),
            ..Default::default()
        };
        let catalog = open_catalog(&config).unwrap();
        assert_eq!(catalog.canopy_sizes(), vec![46.0]);
    }

    #[test]
    fn test_read_catalog_keeps_invalid_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.json");
        std::fs::write(
            &path,
            r#"{"canopies": [{"size": 46.0, "max_wind_closed": 14.0, "max_wind_open": 12.0, "min_weight": 200.0, "max_weight": 650.0}]}"#,
        )
        .unwrap();

        assert!(open_catalog_at(Some(&path)).is_err());
        let catalog = read_catalog_at(Some(&path)).unwrap();
        assert_eq!(catalog.canopy_sizes(), vec![46.0]);
        assert!(!catalog.issues().is_empty());
    }

    #[test]
    fn test_missing_data_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(open_catalog_at(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
