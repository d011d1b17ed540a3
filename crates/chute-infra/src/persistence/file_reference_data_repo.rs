//! File-based implementation of ReferenceDataRepository

use std::path::{Path, PathBuf};

use chute_domain::model::{CanopySpec, TowBarSpec};
use chute_domain::repository::ReferenceDataRepository;
use chute_types::Error;

use crate::reference_loader::ReferenceDataLoader;

/// File-based reference data repository (TOML or JSON)
pub struct FileReferenceDataRepository {
    path: PathBuf,
    loader: ReferenceDataLoader,
}

impl FileReferenceDataRepository {
    /// Create a new repository from a data file path
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let loader = ReferenceDataLoader::load_from_file(&path)?;
        Ok(Self { path, loader })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload data from the file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = ReferenceDataLoader::load_from_file(&self.path)?;
        Ok(())
    }
}

impl ReferenceDataRepository for FileReferenceDataRepository {
    fn canopies(&self) -> Result<Vec<CanopySpec>, Error> {
        Ok(self.loader.canopies().to_vec())
    }

    fn bars(&self) -> Result<Vec<TowBarSpec>, Error> {
        Ok(self.loader.bars().to_vec())
    }
}
