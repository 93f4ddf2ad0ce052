//! Whole-file writes that never leave a half-written target behind.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use super::paths::ensure_dir;

const TMP_SUFFIX: &str = "tmp";

/// Sibling scratch file: `records.json` becomes `records.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to the scratch file and renames it over `path`. On error
/// the previous contents of `path` are untouched.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    drop(file);
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/data/records.json")),
            PathBuf::from("/data/records.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("notes")), PathBuf::from("notes.tmp"));
    }

    #[test]
    fn replaces_contents_and_cleans_up() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("doc.json");
        write_atomic(&path, "first").expect("first write");
        write_atomic(&path, "second").expect("second write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "second");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn failed_write_keeps_previous_contents() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("doc.json");
        write_atomic(&path, "kept").expect("write");
        fs::create_dir(tmp_path(&path)).expect("block scratch file");

        assert!(write_atomic(&path, "lost").is_err());
        assert_eq!(fs::read_to_string(&path).expect("read"), "kept");
    }
}
