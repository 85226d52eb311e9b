use crate::types::{CaseResult, Outcome, Summary};
use colored::Colorize;
use std::io::{self, Write};

/// Status line for one case, followed by its diff or error detail on failure.
pub fn render_case(result: &CaseResult, color: bool) -> String {
    let mut out = String::new();
    let status = match (result.passed(), color) {
        (true, true) => "passed".green().to_string(),
        (true, false) => "passed".to_string(),
        (false, true) => "failed".red().bold().to_string(),
        (false, false) => "failed".to_string(),
    };
    out.push_str(&format!("Test {} {}\n", result.name, status));
    match &result.outcome {
        Outcome::Passed => {}
        Outcome::Mismatch { diff } => {
            out.push_str(diff);
            if !diff.is_empty() && !diff.ends_with('\n') {
                out.push('\n');
            }
        }
        Outcome::Error { message } => {
            let label = if color {
                "error:".bold().to_string()
            } else {
                "error:".to_string()
            };
            out.push_str(&format!("  {label} {message}\n"));
        }
    }
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!("{} passed, {} failed\n", summary.passed, summary.failed)
}

/// Accumulates case results and writes their status lines as they arrive.
///
/// Writes go to the diagnostic stream handed in by the caller (stderr in the
/// binary), never to stdout.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            summary: Summary::default(),
        }
    }

    pub fn record(&mut self, result: CaseResult) -> io::Result<()> {
        self.out.write_all(render_case(&result, self.color).as_bytes())?;
        self.out.flush()?;
        self.summary.record(result);
        Ok(())
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Writes the totals line and hands back the final summary.
    pub fn finish(mut self) -> io::Result<Summary> {
        self.out.write_all(render_summary(&self.summary).as_bytes())?;
        self.out.flush()?;
        Ok(self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, outcome: Outcome) -> CaseResult {
        CaseResult {
            name: name.into(),
            outcome,
        }
    }

    #[test]
    fn plain_status_lines() {
        assert_eq!(
            render_case(&result("hello", Outcome::Passed), false),
            "Test hello passed\n"
        );
        let failed = render_case(
            &result(
                "order",
                Outcome::Mismatch {
                    diff: "--- e\n+++ a\n".into(),
                },
            ),
            false,
        );
        assert_eq!(failed, "Test order failed\n--- e\n+++ a\n");
    }

    #[test]
    fn error_detail_is_indented() {
        let text = render_case(
            &result(
                "gone",
                Outcome::Error {
                    message: "could not launch 'x'".into(),
                },
            ),
            false,
        );
        assert_eq!(text, "Test gone failed\n  error: could not launch 'x'\n");
    }

    #[test]
    fn reporter_counts_and_summarizes() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf, false);
        reporter.record(result("a", Outcome::Passed)).unwrap();
        reporter
            .record(result(
                "b",
                Outcome::Error {
                    message: "boom".into(),
                },
            ))
            .unwrap();
        reporter.record(result("c", Outcome::Passed)).unwrap();
        assert_eq!(reporter.summary().total, 3);
        let summary = reporter.finish().unwrap();
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.exit_code(), 1);

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Test a passed\nTest b failed\n"));
        assert!(text.ends_with("Test c passed\n2 passed, 1 failed\n"));
    }

    #[test]
    fn empty_run_exits_zero() {
        let summary = Reporter::new(Vec::new(), false).finish().unwrap();
        assert_eq!(render_summary(&summary), "0 passed, 0 failed\n");
        assert_eq!(summary.exit_code(), 0);
    }
}
