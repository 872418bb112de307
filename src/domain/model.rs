use std::ffi::OsString;
use std::path::PathBuf;

/// Ordered names of the enabled optional modules.
pub type ModuleList = Vec<String>;

/// Ordered header paths for the umbrella test header.
pub type HeaderSourceList = Vec<PathBuf>;

/// Raw invocation tokens, program name first.
pub type ArgumentVector = Vec<OsString>;

/// Decoded contents of a `_cl_` blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgBlob {
    /// Count written by the producer; includes the program name.
    pub total_count: u32,
    pub args: Vec<Vec<u8>>,
}

impl ArgBlob {
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| String::from_utf8_lossy(arg).into_owned())
            .collect()
    }
}

/// One file produced by a generator run.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: &'static str,
    pub path: PathBuf,
    pub contents: Vec<u8>,
}
