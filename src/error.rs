use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run before any case executes.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("cases directory {} cannot be read", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("case definition {} has a non-UTF-8 name", path.display())]
    NonUtf8CaseName { path: PathBuf },
    #[error("output directory {} cannot be created", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write report")]
    Report(#[source] io::Error),
}

/// Errors confined to a single case. The engine turns every one of these into
/// a failed result and moves on to the next case.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("expected output {} is missing or unreadable", path.display())]
    MissingFixture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not launch '{}'", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not capture output of '{}'", program.display())]
    Capture {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("output captured in {} is not valid UTF-8", path.display())]
    InvalidOutput {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("cannot write artifact {}", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
