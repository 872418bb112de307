use crate::config::cli::LocalStorage;
use crate::domain::model::{Artifact, HeaderSourceList};
use crate::domain::ports::{Generator, Storage};
use crate::utils::error::Result;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// 以字面方式正規化路徑 (不存取檔案系統, 不解析符號連結)
///
/// Repeated separators and `.` segments disappear, `dir/..` pairs cancel,
/// `..` directly under the root is dropped and leading `..` of a relative
/// path is kept. An empty result becomes `.`. On POSIX exactly two leading
/// slashes are preserved, since their meaning is implementation-defined.
pub fn normalize_path(path: &Path) -> String {
    let raw = path.as_os_str().as_encoded_bytes();
    let double_root = cfg!(unix) && raw.starts_with(b"//") && !raw.starts_with(b"///");
    let mut prefix = String::new();
    let mut rooted = false;
    let mut parts: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = p.as_os_str().to_string_lossy().into_owned(),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push("..".to_string()),
            },
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    let mut out = prefix;
    if double_root {
        out.push_str("//");
    } else if rooted {
        out.push_str(MAIN_SEPARATOR_STR);
    }
    out.push_str(&parts.join(MAIN_SEPARATOR_STR));
    if out.is_empty() {
        out.push('.');
    }
    out
}

pub fn render_test_aggregate_header(headers: &[PathBuf]) -> String {
    headers
        .iter()
        .map(|header| format!("#include \"{}\"\n", normalize_path(header)))
        .collect()
}

pub struct TestAggregateHeader {
    headers: HeaderSourceList,
    output_path: PathBuf,
}

impl TestAggregateHeader {
    pub fn new(headers: HeaderSourceList, output_path: impl Into<PathBuf>) -> Self {
        Self {
            headers,
            output_path: output_path.into(),
        }
    }
}

impl Generator for TestAggregateHeader {
    fn render(&self) -> Result<Artifact> {
        tracing::debug!(
            "Aggregating {} test header(s) into {}",
            self.headers.len(),
            self.output_path.display()
        );

        Ok(Artifact {
            name: "tests-header",
            path: self.output_path.clone(),
            contents: render_test_aggregate_header(&self.headers).into_bytes(),
        })
    }
}

/// Writes one `#include` line per header, in input order.
pub fn generate_test_aggregate_header(headers: &[PathBuf], output_path: &Path) -> Result<()> {
    let artifact = TestAggregateHeader::new(headers.to_vec(), output_path).render()?;
    LocalStorage::default().write_file(&artifact.path, &artifact.contents)
}
