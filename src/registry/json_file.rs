//! JSON file primitives shared by the registry stores
//!
//! Files are written in one canonical layout (struct key order, 4-space
//! indentation, trailing newline) so generated and hand-edited files compare
//! byte for byte. Every write goes to a temporary file in the target
//! directory and is renamed into place once flushed to disk.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::{RegistryError, RegistryResult};

const INDENT: &[u8] = b"    ";

/// Serialize a value in the canonical layout
pub fn to_canonical_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Read and decode a JSON file
///
/// Decode failures come back as `io::ErrorKind::InvalidData` so callers
/// handle one error type for every storage fault.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(io::Error::from)
}

/// Replace (or create) a JSON file
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> RegistryResult<()> {
    let bytes = to_canonical_json(value).map_err(|e| RegistryError::storage(path, e))?;
    write_atomic(path, &bytes, true)
}

/// Create a JSON file that must not exist yet, creating parent directories
pub fn create_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> RegistryResult<()> {
    if path.exists() {
        return Err(RegistryError::FileExists {
            path: path.to_path_buf(),
        });
    }
    let bytes = to_canonical_json(value).map_err(|e| RegistryError::storage(path, e))?;
    write_atomic(path, &bytes, false)
}

/// Re-serialize an existing JSON file in the canonical layout
///
/// Key order is preserved. Returns `true` when the file content changed.
pub fn format_json_file(path: &Path) -> RegistryResult<bool> {
    let original = fs::read(path).map_err(|e| RegistryError::storage(path, e))?;
    let value: serde_json::Value =
        serde_json::from_slice(&original).map_err(|e| RegistryError::storage(path, e))?;
    let formatted = to_canonical_json(&value).map_err(|e| RegistryError::storage(path, e))?;

    if formatted == original {
        return Ok(false);
    }

    write_atomic(path, &formatted, true)?;
    Ok(true)
}

/// Write bytes through a temp file in the destination directory, then rename
///
/// With `clobber == false` the rename refuses to replace an existing file.
pub fn write_atomic(path: &Path, bytes: &[u8], clobber: bool) -> RegistryResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| RegistryError::storage(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RegistryError::storage(dir, e))?;
    tmp.write_all(bytes)
        .map_err(|e| RegistryError::storage(path, e))?;
    tmp.flush().map_err(|e| RegistryError::storage(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| RegistryError::storage(path, e))?;

    let persisted = if clobber {
        tmp.persist(path)
    } else {
        tmp.persist_noclobber(path)
    };

    persisted.map(|_| ()).map_err(|e| {
        if !clobber && e.error.kind() == io::ErrorKind::AlreadyExists {
            RegistryError::FileExists {
                path: path.to_path_buf(),
            }
        } else {
            RegistryError::storage(path, e.error)
        }
    })
}
