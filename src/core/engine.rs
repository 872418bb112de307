use crate::domain::ports::{Generator, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct GenEngine<S: Storage> {
    storage: S,
}

impl<S: Storage> GenEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Renders every generator first, then writes; a render failure leaves
    /// the output tree untouched.
    pub fn run(&self, generators: &[&dyn Generator]) -> Result<Vec<PathBuf>> {
        tracing::info!("Starting code generation ({} target(s))", generators.len());

        let artifacts = generators
            .iter()
            .map(|generator| generator.render())
            .collect::<Result<Vec<_>>>()?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            self.storage.write_file(&artifact.path, &artifact.contents)?;
            tracing::info!(
                "📝 {}: wrote {} ({} bytes)",
                artifact.name,
                artifact.path.display(),
                artifact.contents.len()
            );
            written.push(artifact.path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Artifact;
    use crate::utils::error::GenError;
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files
                .borrow()
                .iter()
                .find(|(p, _)| p == path)
                .map(|(_, data)| data.clone())
                .ok_or_else(|| GenError::IoError(std::io::ErrorKind::NotFound.into()))
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().push((path.to_path_buf(), data.to_vec()));
            Ok(())
        }
    }

    struct Fixed(&'static str);

    impl Generator for Fixed {
        fn render(&self) -> Result<Artifact> {
            Ok(Artifact {
                name: "fixed",
                path: PathBuf::from(self.0),
                contents: self.0.as_bytes().to_vec(),
            })
        }
    }

    struct Failing;

    impl Generator for Failing {
        fn render(&self) -> Result<Artifact> {
            Err(GenError::MissingConfigError {
                field: "modules.header".to_string(),
            })
        }
    }

    #[test]
    fn test_run_writes_in_order() {
        let engine = GenEngine::new(MemoryStorage::default());
        let written = engine.run(&[&Fixed("a.h"), &Fixed("b.h")]).unwrap();

        assert_eq!(written, vec![PathBuf::from("a.h"), PathBuf::from("b.h")]);
        assert_eq!(engine.storage.read_file(Path::new("b.h")).unwrap(), b"b.h");
    }

    #[test]
    fn test_render_failure_writes_nothing() {
        let engine = GenEngine::new(MemoryStorage::default());
        assert!(engine.run(&[&Fixed("a.h"), &Failing]).is_err());
        assert!(engine.storage.files.borrow().is_empty());
    }
}
