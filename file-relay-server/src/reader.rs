//! Validates a path and reads the file behind it as UTF-8 text.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a single read attempt. Never retried; every variant is
/// terminal for the invocation that hit it.
#[derive(Debug, Error)]
pub enum ReadFileError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolves `path` against the current working directory.
///
/// Errors only if the working directory itself cannot be determined.
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Resolves `path`, checks existence and reads the file as UTF-8.
///
/// The content is returned verbatim, trailing newline included. A file
/// deleted between the existence check and the read is an unguarded
/// race and surfaces as [`ReadFileError::Read`].
pub async fn read_file(path: &Path) -> Result<String, ReadFileError> {
    let path = resolve(path).map_err(|source| ReadFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Err(ReadFileError::NotFound { path });
    }

    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ReadFileError::Read { path, source })
}
