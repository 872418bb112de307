//! The `_cl_` argument blob.
//!
//! Layout: `[u32 total][u32 len_1][bytes_1] ... [u32 len_n][bytes_n]` with
//! `total` counting the program name and `n = total - 1`. Integers use the
//! host byte order, so producer and consumer must share endianness.

use crate::domain::model::ArgBlob;
use crate::utils::error::{GenError, Result};
use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

pub const BLOB_FILE_NAME: &str = "_cl_";

#[cfg(unix)]
fn os_bytes(arg: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn os_bytes(arg: &OsStr) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}

fn to_u32(what: &str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| GenError::BlobOverflowError {
        what: what.to_string(),
        value,
    })
}

/// Encodes `raw_args` (program name first) into `writer`.
pub fn write_blob<W: Write, S: AsRef<OsStr>>(writer: &mut W, raw_args: &[S]) -> Result<()> {
    writer.write_u32::<NativeEndian>(to_u32("argument count", raw_args.len())?)?;
    for (index, arg) in raw_args.iter().enumerate().skip(1) {
        let bytes = os_bytes(arg.as_ref());
        writer.write_u32::<NativeEndian>(to_u32(&format!("length of argument {}", index), bytes.len())?)?;
        writer.write_all(&bytes)?;
    }
    Ok(())
}

/// Serializes the invocation arguments to `output_path`.
///
/// Returns `Ok(false)` without touching the file system when there is
/// nothing beyond the program name.
pub fn serialize_args<S: AsRef<OsStr>>(raw_args: &[S], output_path: &Path) -> Result<bool> {
    if raw_args.len() < 2 {
        tracing::debug!("No arguments beyond the program name, skipping blob");
        return Ok(false);
    }

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_blob(&mut writer, raw_args)?;
    writer.flush()?;

    tracing::debug!(
        "Wrote {} argument(s) to {}",
        raw_args.len() - 1,
        output_path.display()
    );
    Ok(true)
}

fn truncated(what: String) -> impl FnOnce(std::io::Error) -> GenError {
    move |e| match e.kind() {
        ErrorKind::UnexpectedEof => GenError::BlobFormatError {
            message: format!("truncated {}", what),
        },
        _ => GenError::IoError(e),
    }
}

pub fn read_blob<R: Read>(reader: &mut R) -> Result<ArgBlob> {
    let total_count = reader
        .read_u32::<NativeEndian>()
        .map_err(truncated("argument count".to_string()))?;
    if total_count == 0 {
        return Err(GenError::BlobFormatError {
            message: "argument count is 0, the program name is always counted".to_string(),
        });
    }

    let mut args = Vec::new();
    for index in 1..total_count {
        let len = reader
            .read_u32::<NativeEndian>()
            .map_err(truncated(format!("length of argument {}", index)))?;
        // Length prefixes are untrusted, so never preallocate from them.
        let mut bytes = Vec::new();
        (&mut *reader).take(u64::from(len)).read_to_end(&mut bytes)?;
        if bytes.len() != len as usize {
            return Err(GenError::BlobFormatError {
                message: format!(
                    "truncated payload of argument {} ({} of {} bytes)",
                    index,
                    bytes.len(),
                    len
                ),
            });
        }
        args.push(bytes);
    }

    let mut trailing = Vec::new();
    reader.read_to_end(&mut trailing)?;
    if !trailing.is_empty() {
        return Err(GenError::BlobFormatError {
            message: format!("{} unexpected trailing byte(s)", trailing.len()),
        });
    }

    Ok(ArgBlob { total_count, args })
}

pub fn read_blob_file(path: &Path) -> Result<ArgBlob> {
    let mut reader = BufReader::new(File::open(path)?);
    read_blob(&mut reader)
}

impl ArgBlob {
    /// Re-encodes the blob exactly as it was read.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u32::<NativeEndian>(self.total_count)?;
        for (index, arg) in self.args.iter().enumerate() {
            out.write_u32::<NativeEndian>(to_u32(&format!("length of argument {}", index + 1), arg.len())?)?;
            out.extend_from_slice(arg);
        }
        Ok(out)
    }
}
