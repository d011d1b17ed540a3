//! Reference data loader from TOML or JSON
//!
//! A data file may carry either table or both. Missing tables fall back to
//! the built-in ones.

use std::fs;
use std::path::Path;

use chute_domain::model::{CanopySpec, TowBarSpec};
use chute_domain::reference::{BAR_SPECS, CANOPY_SPECS};
use chute_domain::Catalog;
use chute_types::{ConfigError, Error, Result};
use serde::{Deserialize, Serialize};

/// Container for parsing reference data files
#[derive(Debug, Default, Deserialize, Serialize)]
struct ReferenceDataFile {
    #[serde(default)]
    canopies: Option<Vec<CanopySpec>>,
    #[serde(default)]
    bars: Option<Vec<TowBarSpec>>,
}

/// Data file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Toml,
    Json,
}

impl DataFormat {
    /// `.json` files are JSON, everything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DataFormat::Json,
            _ => DataFormat::Toml,
        }
    }
}

/// Reference tables loaded from a data file
#[derive(Debug)]
pub struct ReferenceDataLoader {
    canopies: Vec<CanopySpec>,
    bars: Vec<TowBarSpec>,
    custom_canopies: bool,
    custom_bars: bool,
}

impl ReferenceDataLoader {
    /// Load reference data from a TOML or JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read reference data file: {}",
                e
            )))
        })?;

        log::debug!("loading reference data from {}", path.display());
        Self::load_from_str(&content, DataFormat::from_path(path))
    }

    /// Load reference data from a string
    pub fn load_from_str(content: &str, format: DataFormat) -> Result<Self> {
        let file: ReferenceDataFile = match format {
            DataFormat::Toml => toml::from_str(content)?,
            DataFormat::Json => serde_json::from_str(content)?,
        };

        let custom_canopies = file.canopies.is_some();
        let custom_bars = file.bars.is_some();

        let loader = Self {
            canopies: file.canopies.unwrap_or_else(|| CANOPY_SPECS.to_vec()),
            bars: file.bars.unwrap_or_else(|| BAR_SPECS.to_vec()),
            custom_canopies,
            custom_bars,
        };

        log::info!(
            "reference data: {} canopies ({}), {} bars ({})",
            loader.canopies.len(),
            if custom_canopies { "file" } else { "built-in" },
            loader.bars.len(),
            if custom_bars { "file" } else { "built-in" },
        );

        Ok(loader)
    }

    pub fn canopies(&self) -> &[CanopySpec] {
        &self.canopies
    }

    pub fn bars(&self) -> &[TowBarSpec] {
        &self.bars
    }

    /// Whether the canopy table came from the file
    pub fn has_custom_canopies(&self) -> bool {
        self.custom_canopies
    }

    /// Whether the bar table came from the file
    pub fn has_custom_bars(&self) -> bool {
        self.custom_bars
    }

    /// Build a validated catalog
    pub fn to_catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::new(self.canopies.clone(), self.bars.clone());
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Render a catalog as a TOML data file
pub fn catalog_to_toml(catalog: &Catalog) -> Result<String> {
    let file = ReferenceDataFile {
        canopies: Some(catalog.canopies().to_vec()),
        bars: Some(catalog.bars().to_vec()),
    };
    toml::to_string_pretty(&file)
        .map_err(|e| Error::Config(ConfigError::SaveError(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chute_types::BarType;

    const TEST_TOML: &str = r#"
[[canopies]]
size = 35.0
max_wind_closed = 16.0
max_wind_open = 17.0
min_weight = 115.0
max_weight = 500.0

[[canopies]]
size = 39.0
max_wind_closed = 12.0
max_wind_open = 14.0
min_weight = 150.0
max_weight = 560.0

[[bars]]
id = "doubleizer-sp"
name = "Doubleizer SP"
display_name = "Doubleizer SP"
has_fulcrum = false
strap_positions = ["A", "B", "C", "D"]

[[bars.doubles_setup]]
position = 0
min_diff = 0.0
max_diff = 10.0
heavy_straps = { left = "A", right = "B" }
light_straps = { left = "C", right = "D" }

[[bars.doubles_setup]]
position = 1
min_diff = 11.0
max_diff = 35.0
heavy_straps = { left = "A", right = "B" }
light_straps = { left = "C", right = "D" }
"#;

    #[test]
    fn test_load_from_str() {
        let loader = ReferenceDataLoader::load_from_str(TEST_TOML, DataFormat::Toml).unwrap();
        assert_eq!(loader.canopies().len(), 2);
        assert_eq!(loader.bars().len(), 1);
        assert!(loader.has_custom_canopies());
        assert!(loader.has_custom_bars());

        let bar = &loader.bars()[0];
        assert_eq!(bar.id, BarType::DoubleizerSp);
        assert!(bar.position_colors.is_empty());
        assert!(bar.triples_setup.is_none());
    }

    #[test]
    fn test_loaded_catalog_recommends() {
        let catalog = ReferenceDataLoader::load_from_str(TEST_TOML, DataFormat::Toml)
            .unwrap()
            .to_catalog()
            .unwrap();
        let recs = catalog.recommend(300.0, 13.0, &[]);
        assert_eq!(recs.len(), 2);
        assert!(catalog.configure(&[150.0, 130.0], BarType::DoubleizerSp).is_some());
        assert!(catalog.configure(&[150.0, 130.0], BarType::Multiflyer).is_none());
    }

    #[test]
    fn test_missing_tables_fall_back_to_builtin() {
        let loader = ReferenceDataLoader::load_from_str("", DataFormat::Toml).unwrap();
        assert!(!loader.has_custom_canopies());
        assert_eq!(loader.canopies().len(), CANOPY_SPECS.len());
        assert_eq!(loader.bars().len(), BAR_SPECS.len());
    }

    #[test]
    fn test_json_format() {
        let json = r#"{"canopies": [{"size": 21.0, "max_wind_closed": 28.0, "max_wind_open": 29.0, "min_weight": 75.0, "max_weight": 200.0}]}"#;
        let loader = ReferenceDataLoader::load_from_str(json, DataFormat::Json).unwrap();
        assert_eq!(loader.canopies().len(), 1);
        assert!(!loader.has_custom_bars());
    }

    #[test]
    fn test_invalid_table_rejected() {
        let toml = r#"
[[canopies]]
size = 35.0
max_wind_closed = 18.0
max_wind_open = 17.0
min_weight = 115.0
max_weight = 500.0
"#;
        let loader = ReferenceDataLoader::load_from_str(toml, DataFormat::Toml).unwrap();
        let err = loader.to_catalog().unwrap_err();
        assert!(matches!(err, Error::ReferenceData(_)));
    }

    #[test]
    fn test_nan_band_rejected() {
        let toml = TEST_TOML.replace("min_diff = 11.0\nmax_diff = 35.0", "min_diff = nan\nmax_diff = nan");
        assert_ne!(toml, TEST_TOML);
        let loader = ReferenceDataLoader::load_from_str(&toml, DataFormat::Toml).unwrap();
        let err = loader.to_catalog().unwrap_err();
        assert!(matches!(err, Error::ReferenceData(ref msg) if msg.contains("invalid band")));
    }

    #[test]
    fn test_parse_error() {
        let result = ReferenceDataLoader::load_from_str("[[canopies]]\nsize = \"big\"", DataFormat::Toml);
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_builtin_survives_toml_round_trip() {
        let builtin = Catalog::builtin();
        let toml = catalog_to_toml(&builtin).unwrap();
        let reloaded = ReferenceDataLoader::load_from_str(&toml, DataFormat::Toml)
            .unwrap()
            .to_catalog()
            .unwrap();
        assert_eq!(reloaded, builtin);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DataFormat::from_path(Path::new("chart.json")), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("chart.JSON")), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("chart.toml")), DataFormat::Toml);
        assert_eq!(DataFormat::from_path(Path::new("chart")), DataFormat::Toml);
    }
}
