use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActgenError {
    #[error("no output directory specified")]
    MissingOutDir,

    #[error("output must be a directory: {}", .0.display())]
    OutDirNotDirectory(PathBuf),

    #[error("no inputs specified")]
    NoInputs,

    #[error("no JSON or YAML input files found")]
    NoInputFiles,

    #[error("unsupported input file (expected .json, .yaml or .yml): {}", .0.display())]
    UnsupportedInput(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Underlying document error for an input file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(serde_json::Error),

    #[error(transparent)]
    Yaml(serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ActgenError>;
