use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const LEGISLATORS_FILE: &str = "diputados.json";
pub const BILLS_FILE: &str = "bills.json";
pub const EMBEDDINGS_FILE: &str = "embeddings.json";
pub const METADATA_FILE: &str = "metadata.json";

/// JSON layout of an output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Two-space indentation
    Pretty,
    /// No whitespace; used for the large embedding file
    Compact,
}

/// Overwrite `dir/file_name` with `value` as UTF-8 JSON and return the path.
///
/// Non-ASCII text is written as-is. The write is not atomic.
pub fn write_json<T: Serialize + ?Sized>(
    dir: &Path,
    file_name: &str,
    value: &T,
    layout: Layout,
) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let mut writer = BufWriter::new(File::create(&path)?);
    match layout {
        Layout::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
        Layout::Compact => serde_json::to_writer(&mut writer, value)?,
    }
    writer.flush()?;
    Ok(path)
}
