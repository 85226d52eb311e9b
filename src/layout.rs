//! Paths of every case artifact, built from a case name and a fixed directory.

use crate::types::TestCase;
use std::path::{Path, PathBuf};

pub const DEFINITION_EXT: &str = "zt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub cases_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Layout {
    pub fn new(cases_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            cases_dir: cases_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// `<root>/auto/cases` and `<root>/auto/output`.
    pub fn from_test_root(root: &Path) -> Self {
        let auto = root.join("auto");
        Self::new(auto.join("cases"), auto.join("output"))
    }

    pub fn definition_path(&self, name: &str) -> PathBuf {
        self.cases_dir.join(format!("{name}.{DEFINITION_EXT}"))
    }

    pub fn input_path(&self, name: &str) -> PathBuf {
        self.cases_dir.join(format!("words-{name}.txt"))
    }

    pub fn expected_path(&self, name: &str) -> PathBuf {
        self.cases_dir.join(format!("expected-{name}.txt"))
    }

    pub fn actual_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("actual-{name}.txt"))
    }

    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.diff"))
    }

    pub fn case(&self, name: &str) -> TestCase {
        TestCase {
            name: name.to_string(),
            definition: self.definition_path(name),
            input: self.input_path(name),
            expected: self.expected_path(name),
            actual: self.actual_path(name),
            diff: self.diff_path(name),
        }
    }
}
