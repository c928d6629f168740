use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn write_coverage_json(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("coverage.json");
    fs::write(&path, contents).expect("fixture write should succeed");
    path
}
