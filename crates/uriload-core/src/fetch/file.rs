//! Local file reads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;

use crate::error::FetchError;

/// Options for reading local files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReadOptions {
    /// Refuse files larger than this many bytes (None = no limit).
    #[serde(default)]
    pub max_bytes: Option<u64>,
}

/// Reads the full contents of the file at `path`.
pub fn read_file(path: &str, options: &FileReadOptions) -> Result<Vec<u8>, FetchError> {
    let io_err = |source| FetchError::Io {
        path: path.to_string(),
        source,
    };

    let Some(limit) = options.max_bytes else {
        return fs::read(path).map_err(io_err);
    };

    let file = fs::File::open(path).map_err(io_err)?;
    let mut buf = Vec::new();
    // Read one byte past the limit so an oversized file is detected without reading it all.
    file.take(limit.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(io_err)?;
    if buf.len() as u64 > limit {
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(buf.len() as u64);
        return Err(FetchError::TooLarge {
            path: path.to_string(),
            size,
            limit,
        });
    }
    Ok(buf)
}
