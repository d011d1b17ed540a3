//! Repository trait definitions for reference data

use chute_types::Error;

use crate::model::{CanopySpec, TowBarSpec};
use crate::Catalog;

/// Source of canopy and tow bar reference tables
pub trait ReferenceDataRepository {
    /// Load all canopy specs, in ranking tie-break order
    fn canopies(&self) -> Result<Vec<CanopySpec>, Error>;

    /// Load all tow bar specs
    fn bars(&self) -> Result<Vec<TowBarSpec>, Error>;

    /// Load both tables without validating them
    fn read_catalog(&self) -> Result<Catalog, Error> {
        Ok(Catalog::new(self.canopies()?, self.bars()?))
    }

    /// Load both tables and validate them together
    fn load_catalog(&self) -> Result<Catalog, Error> {
        let catalog = self.read_catalog()?;
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Repository backed by the compiled-in tables
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinReferenceData;

impl ReferenceDataRepository for BuiltinReferenceData {
    fn canopies(&self) -> Result<Vec<CanopySpec>, Error> {
        Ok(crate::reference::CANOPY_SPECS.to_vec())
    }

    fn bars(&self) -> Result<Vec<TowBarSpec>, Error> {
        Ok(crate::reference::BAR_SPECS.to_vec())
    }
}
