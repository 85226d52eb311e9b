use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub definition: PathBuf,
    pub input: PathBuf,
    pub expected: PathBuf,
    pub actual: PathBuf,
    pub diff: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Mismatch { diff: String }, // Unified diff of the normalized outputs
    Error { message: String }, // Comparison could not be attempted
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub outcome: Outcome,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total: usize,  // Number of cases attempted
    pub passed: usize, // Number of passed cases
    pub failed: usize, // Number of failed cases
    pub cases: Vec<CaseResult>,
}

impl Summary {
    pub fn record(&mut self, result: CaseResult) {
        self.total += 1;
        if result.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.cases.push(result);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }
}
