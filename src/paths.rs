//! Path resolution for the data directory and store file.

use std::env;
use std::path::PathBuf;

/// Get the data directory the store file lives in.
///
/// Defaults to `data/` relative to the working directory; `TALLY_DATA_DIR`
/// overrides it. The directory is created on demand by the binary, not here.
pub fn data_dir() -> PathBuf {
    env::var("TALLY_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Get the default database file path (data_dir/lists.db).
pub fn db_path() -> PathBuf {
    data_dir().join("lists.db")
}
