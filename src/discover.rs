use crate::error::HarnessError;
use crate::layout::{DEFINITION_EXT, Layout};
use crate::types::TestCase;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Lists the case names defined in `cases_dir`, sorted lexicographically.
///
/// A case exists when a `<name>.zt` file sits directly in the directory.
/// Whether its input and expected output exist is checked later, per case.
pub fn discover_case_names(cases_dir: &Path) -> Result<Vec<String>, HarnessError> {
    let discovery_err = |source: io::Error| HarnessError::Discovery {
        path: cases_dir.to_path_buf(),
        source,
    };

    let meta = fs::metadata(cases_dir).map_err(discovery_err)?;
    if !meta.is_dir() {
        return Err(discovery_err(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(cases_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| discovery_err(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != DEFINITION_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(HarnessError::NonUtf8CaseName {
                path: path.to_path_buf(),
            });
        };
        names.push(stem.to_string());
    }
    // File-name order and case-name order differ ("a-b.zt" < "a.zt"), so sort the names.
    names.sort();
    debug!("Discovered {} case(s) in {}", names.len(), cases_dir.display());
    Ok(names)
}

/// Discovers the cases under `layout.cases_dir` and resolves their paths.
pub fn discover(layout: &Layout) -> Result<Vec<TestCase>, HarnessError> {
    let names = discover_case_names(&layout.cases_dir)?;
    Ok(names.iter().map(|name| layout.case(name)).collect())
}
