//! Error taxonomy
//!
//! Operations return `anyhow::Result` and attach context as they go; the
//! variants below are the failures callers may want to match on.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GasError {
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to run `{program}`: {source}")]
    GitSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {command}` failed in {} ({}): {stderr}", .dir.display(), exit_code_label(.exit_code))]
    GitCommand {
        command: String,
        dir: PathBuf,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("`git {command}` in {} did not finish within {timeout:?}", .dir.display())]
    GitTimeout {
        command: String,
        dir: PathBuf,
        timeout: Duration,
    },

    #[error("malformed branch record {record:?}: expected {expected} fields, found {found}")]
    MalformedRecord {
        record: String,
        expected: usize,
        found: usize,
    },

    #[error("malformed branch record {record:?}: unexpected current-branch marker {marker:?}")]
    MalformedMarker { record: String, marker: String },
}

fn exit_code_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
