//! Drop-in argument serializer: `cl-blob arg1 ... argN` writes `_cl_` into
//! the working directory. No flags are parsed, every token is data.

use anyhow::Context;
use buildgen::utils::logger;
use buildgen::{serialize_args, BLOB_FILE_NAME};
use std::ffi::OsString;

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let raw_args: Vec<OsString> = std::env::args_os().collect();
    if raw_args.len() < 2 {
        return Ok(());
    }

    let output_path = std::env::current_dir()
        .context("Failed to resolve the working directory")?
        .join(BLOB_FILE_NAME);

    serialize_args(&raw_args, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    Ok(())
}
