use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that stop a scan before any chart is drawn. Their `Display` output
/// is the exact line shown to the user.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path '{}' not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Error: {0}")]
    Listing(#[source] io::Error),
}
