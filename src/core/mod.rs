pub mod arg_blob;
pub mod engine;
pub mod modules_header;
pub mod tests_header;

pub use crate::domain::model::{ArgBlob, Artifact};
pub use crate::domain::ports::{Generator, Storage};
pub use crate::utils::error::Result;
