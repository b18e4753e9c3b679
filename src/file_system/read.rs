use std::{fs, io, path::Path};

use indicatif::ProgressBar;
use tracing::debug;

use crate::{
    bytes::to_megabytes,
    error::ScanError,
    file_system::{entry::Entry, size::get_size},
};

/// Lists the direct children of `root` and aggregates each one's size.
///
/// The listing itself must succeed as a whole; failures inside a child's
/// subtree only shrink that child's size (see [`get_size`]).
pub fn read_entries(root: &Path, progress: &ProgressBar) -> Result<Vec<Entry>, ScanError> {
    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }

    let children = fs::read_dir(root)
        .and_then(|it| it.collect::<io::Result<Vec<_>>>())
        .map_err(ScanError::Listing)?;

    debug!(path = %root.display(), children = children.len(), "listed directory");

    progress.set_length(children.len() as u64);

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        let name = child.file_name().to_string_lossy().into_owned();
        progress.set_message(name.clone());

        let size = get_size(&child.path());
        debug!(name = %name, bytes = size, "aggregated entry");

        entries.push(Entry::new(name, to_megabytes(size)));
        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(entries)
}
