use crate::diff::{DEFAULT_CONTEXT, unified_diff};
use crate::error::CaseError;
use crate::normalize::normalize_lines;
use crate::types::TestCase;
use std::fs;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Match,
    Mismatch { diff: String },
}

/// Compares two output blobs after normalization. The diff headers name
/// `expected_label` and `actual_label`.
pub fn compare_text(
    expected: &str,
    actual: &str,
    expected_label: &str,
    actual_label: &str,
) -> Comparison {
    let expected = normalize_lines(expected);
    let actual = normalize_lines(actual);
    if expected == actual {
        return Comparison::Match;
    }
    Comparison::Mismatch {
        diff: unified_diff(
            &expected,
            &actual,
            expected_label,
            actual_label,
            DEFAULT_CONTEXT,
        ),
    }
}

/// Reads the case's golden file, compares it with `actual` and, on mismatch,
/// writes the diff to the case's diff artifact.
pub fn compare_case(case: &TestCase, actual: &str) -> Result<Comparison, CaseError> {
    let expected =
        fs::read_to_string(&case.expected).map_err(|source| CaseError::MissingFixture {
            path: case.expected.clone(),
            source,
        })?;
    let comparison = compare_text(
        &expected,
        actual,
        &case.expected.display().to_string(),
        &case.actual.display().to_string(),
    );
    if let Comparison::Mismatch { diff } = &comparison {
        fs::write(&case.diff, diff).map_err(|source| CaseError::Artifact {
            path: case.diff.clone(),
            source,
        })?;
        debug!("Wrote {}", case.diff.display());
    }
    Ok(comparison)
}
