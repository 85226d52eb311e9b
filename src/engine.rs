use crate::backend::Backend;
use crate::compare::{Comparison, compare_case};
use crate::discover::discover;
use crate::error::{CaseError, HarnessError};
use crate::layout::Layout;
use crate::report::Reporter;
use crate::types::{CaseResult, Outcome, Summary, TestCase};
use std::fs;
use std::io::Write;
use tracing::{debug, info};

/// Executing and comparing phases of one case. The actual-output artifact is
/// written before anything can fail on the comparison side.
fn execute_case<B: Backend>(backend: &B, case: &TestCase) -> Result<Comparison, CaseError> {
    let write_actual = |bytes: &[u8]| {
        fs::write(&case.actual, bytes).map_err(|source| CaseError::Artifact {
            path: case.actual.clone(),
            source,
        })
    };
    let raw = match backend.run(&case.definition, &case.input) {
        Ok(raw) => raw,
        Err(e @ CaseError::Launch { .. }) => {
            // Nothing ran, so the artifact is empty rather than left over from a previous run.
            write_actual(b"".as_slice())?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };
    write_actual(raw.as_slice())?;
    debug!("Wrote {} ({} bytes)", case.actual.display(), raw.len());

    let actual = String::from_utf8(raw).map_err(|source| CaseError::InvalidOutput {
        path: case.actual.clone(),
        source,
    })?;
    compare_case(case, &actual)
}

/// Runs one case to a verdict. Every error stays inside the case.
pub fn run_case<B: Backend>(backend: &B, case: &TestCase) -> CaseResult {
    let outcome = match execute_case(backend, case) {
        Ok(Comparison::Match) => Outcome::Passed,
        Ok(Comparison::Mismatch { diff }) => Outcome::Mismatch { diff },
        Err(e) => Outcome::Error {
            message: format!("{:#}", anyhow::Error::new(e)),
        },
    };
    CaseResult {
        name: case.name.clone(),
        outcome,
    }
}

/// Runs `cases` one after another in the given order, reporting each.
/// A failing case never stops the loop.
pub fn run_cases<B: Backend, W: Write>(
    backend: &B,
    cases: &[TestCase],
    reporter: &mut Reporter<W>,
) -> Result<(), HarnessError> {
    for case in cases {
        debug!("Running case {}", case.name);
        let result = run_case(backend, case);
        reporter.record(result).map_err(HarnessError::Report)?;
    }
    Ok(())
}

/// Creates the output directory if it does not exist yet.
pub fn prepare_output_dir(layout: &Layout) -> Result<(), HarnessError> {
    fs::create_dir_all(&layout.output_dir).map_err(|source| HarnessError::OutputDir {
        path: layout.output_dir.clone(),
        source,
    })
}

/// Whole run: discover, prepare the output directory, run every case and
/// write the totals line.
pub fn run<B: Backend, W: Write>(
    backend: &B,
    layout: &Layout,
    mut reporter: Reporter<W>,
) -> Result<Summary, HarnessError> {
    let cases = discover(layout)?;
    prepare_output_dir(layout)?;
    info!(
        "Running {} case(s) from {}",
        cases.len(),
        layout.cases_dir.display()
    );
    run_cases(backend, &cases, &mut reporter)?;
    let summary = reporter.finish().map_err(HarnessError::Report)?;
    info!(
        "Finished: {} passed, {} failed",
        summary.passed, summary.failed
    );
    Ok(summary)
}
