use crate::error::CaseError;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs the program under test for one case and returns its raw output.
pub trait Backend {
    /// Output is the combined stdout/stderr stream, undecoded.
    fn run(&self, definition: &Path, input: &Path) -> Result<Vec<u8>, CaseError>;
}

/// Backend that spawns an external executable as
/// `<program> <definition> <input>`.
#[derive(Debug, Clone)]
pub struct ExternalBackend {
    pub program: PathBuf,
}

impl ExternalBackend {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn capture_err(&self, source: io::Error) -> CaseError {
        CaseError::Capture {
            program: self.program.clone(),
            source,
        }
    }
}

impl Backend for ExternalBackend {
    fn run(&self, definition: &Path, input: &Path) -> Result<Vec<u8>, CaseError> {
        // Both streams share one pipe so the output keeps the program's own interleaving.
        let (mut reader, writer) = io::pipe().map_err(|e| self.capture_err(e))?;
        let writer_err = writer.try_clone().map_err(|e| self.capture_err(e))?;

        // The Command is a temporary: our copies of the write end are gone once
        // spawn returns, so the read below sees EOF when the child exits.
        let mut child = Command::new(&self.program)
            .arg(definition)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_err)
            .spawn()
            .map_err(|source| CaseError::Launch {
                program: self.program.clone(),
                source,
            })?;
        debug!(
            "Spawned {} {} {} (pid {})",
            self.program.display(),
            definition.display(),
            input.display(),
            child.id()
        );

        let mut output = Vec::new();
        let read = reader.read_to_end(&mut output);
        // Reap the child even when reading failed.
        let status = child.wait().map_err(|e| self.capture_err(e))?;
        read.map_err(|e| self.capture_err(e))?;

        if !status.success() {
            // Exit status is not part of the verdict.
            debug!("{} exited with {}", self.program.display(), status);
        }
        Ok(output)
    }
}

fn display_path(path: &Path) -> String {
    match std::fs::canonicalize(path) {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_) => path.display().to_string(),
    }
}

/// Full path of the program for log output: bare command names are looked up
/// on `PATH`, anything with a separator is canonicalized.
pub fn resolve_program_path(program: &Path) -> String {
    if program.components().count() > 1 {
        return display_path(program);
    }
    match which::which(program) {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_) => program.display().to_string(),
    }
}
