use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

use crate::splice::{RenderedBlock, SpliceError, splice};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("create document directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read document {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("update document {path}")]
    Splice {
        path: PathBuf,
        #[source]
        source: SpliceError,
    },
    #[error("write document {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    pub fn path(&self) -> &Path {
        match self {
            DocumentError::CreateDir { path, .. }
            | DocumentError::Read { path, .. }
            | DocumentError::Splice { path, .. }
            | DocumentError::Write { path, .. } => path,
        }
    }
}

/// Rewrites the marked region of the document at `path` in place.
///
/// Nothing is written unless both markers are found in order.
pub fn update_document(path: &Path, block: &RenderedBlock) -> Result<(), DocumentError> {
    ensure_parent_dir(path)?;
    let original = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let updated = splice(&original, block).map_err(|source| DocumentError::Splice {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, updated).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), DocumentError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent == Path::new(".") {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| DocumentError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}
