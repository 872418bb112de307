pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::BuildConfig, CliConfig};
pub use core::arg_blob::{read_blob_file, serialize_args, BLOB_FILE_NAME};
pub use core::engine::GenEngine;
pub use core::modules_header::generate_modules_enabled_header;
pub use core::tests_header::generate_test_aggregate_header;
pub use utils::error::{GenError, Result};
