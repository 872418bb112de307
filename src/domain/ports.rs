use crate::domain::model::Artifact;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

/// A build-time code generator that renders exactly one file.
pub trait Generator {
    fn render(&self) -> Result<Artifact>;
}
