//! Fixture helpers shared by this crate's unit tests.

use std::path::{Path, PathBuf};

/// Create (or empty) a scratch directory unique to `name` and this process.
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seabed-world-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Write a snapshot table with the standard header and the given
/// `(x, y, value)` rows.
pub(crate) fn write_table(dir: &Path, file: &str, rows: &[(usize, usize, &str)]) -> PathBuf {
    let mut contents = String::from("id,x,y,value\n");
    for (id, (x, y, value)) in rows.iter().enumerate() {
        contents.push_str(&format!("{id},{x},{y},{value}\n"));
    }
    let path = dir.join(file);
    let _ = std::fs::write(&path, contents);
    path
}
