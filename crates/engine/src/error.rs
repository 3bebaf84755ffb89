use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Root '{path}' is missing or inaccessible: {source}")]
    InvalidRoot {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root '{path}' is not a directory")]
    NotADirectory { path: std::path::PathBuf },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
