use std::{
    fs::{self, Metadata},
    path::Path,
};

use tracing::debug;

use crate::ok_or;

/// Total on-disk size of `path` in bytes.
///
/// A regular file counts its own length and a directory counts every regular
/// file below it. If `path` itself is a symlink it is resolved, but symlinks
/// met inside a directory are never followed and count as zero. Anything that
/// cannot be read also counts as zero, only for the file or subtree that
/// failed, so one unreadable entry never sinks the scan.
pub fn get_size(path: &Path) -> u64 {
    let metadata = ok_or!(fs::metadata(path), err => {
        debug!(path = %path.display(), error = %err, "cannot stat entry, counting as 0");
        return 0;
    });

    size_of(path, &metadata)
}

fn size_of(path: &Path, metadata: &Metadata) -> u64 {
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        0
    } else if file_type.is_file() {
        metadata.len()
    } else if file_type.is_dir() {
        dir_size(path)
    } else {
        0
    }
}

fn dir_size(path: &Path) -> u64 {
    let it = ok_or!(fs::read_dir(path), err => {
        debug!(path = %path.display(), error = %err, "cannot read dir, counting as 0");
        return 0;
    });

    let mut size: u64 = 0;

    for entry in it {
        let entry = ok_or!(entry, err => {
            debug!(path = %path.display(), error = %err, "dir entry read error, skipping");
            continue;
        });

        // DirEntry::metadata does not traverse symlinks.
        let metadata = ok_or!(entry.metadata(), err => {
            debug!(path = %entry.path().display(), error = %err, "cannot stat entry, skipping");
            continue;
        });

        size = size.saturating_add(size_of(&entry.path(), &metadata));
    }

    size
}

#[cfg(test)]
mod tests {
    use std::{fs::File, io::Write};

    use tempfile::TempDir;

    use super::*;

    fn write_bytes(path: &Path, n: usize) {
        let mut f = File::create(path).unwrap();
        f.write_all(&vec![0u8; n]).unwrap();
    }

    #[test]
    fn test_file_size_is_exact_length() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        write_bytes(&file, 1234);

        assert_eq!(get_size(&file), 1234);
    }

    #[test]
    fn test_missing_path_is_zero() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(get_size(&tmp.path().join("nope")), 0);
    }

    #[test]
    fn test_empty_dir_is_zero() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(get_size(tmp.path()), 0);
    }

    #[test]
    fn test_dir_sums_nested_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("alpha/deep/deeper")).unwrap();
        fs::create_dir_all(root.join("beta")).unwrap();

        write_bytes(&root.join("alpha/a.txt"), 100);
        write_bytes(&root.join("alpha/deep/b.rs"), 200);
        write_bytes(&root.join("alpha/deep/deeper/c.bin"), 300);
        write_bytes(&root.join("beta/d.png"), 400);
        write_bytes(&root.join("e.zip"), 500);

        assert_eq!(get_size(&root.join("alpha")), 600);
        assert_eq!(get_size(&root.join("beta")), 400);
        assert_eq!(get_size(root), 1500);
    }

    #[test]
    fn test_sparse_file_counts_apparent_length() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("sparse.bin");
        File::create(&file).unwrap().set_len(52_428_800).unwrap();

        assert_eq!(get_size(&file), 52_428_800);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_inside_dir_counts_zero() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("root");
        fs::create_dir(&root).unwrap();
        let outside = tmp.path().join("outside.bin");
        write_bytes(&outside, 4096);
        write_bytes(&root.join("real.bin"), 10);
        symlink(&outside, root.join("link.bin")).unwrap();

        assert_eq!(get_size(&root), 10);
    }

    #[cfg(unix)]
    #[test]
    fn test_top_level_symlink_is_resolved() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir(root.join("data")).unwrap();
        write_bytes(&root.join("data/x.bin"), 700);
        write_bytes(&root.join("real.bin"), 300);
        symlink(root.join("data"), root.join("data_link")).unwrap();
        symlink(root.join("real.bin"), root.join("file_link")).unwrap();

        assert_eq!(get_size(&root.join("data_link")), 700);
        assert_eq!(get_size(&root.join("file_link")), 300);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dir_inside_walk_is_not_followed() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir(root.join("data")).unwrap();
        write_bytes(&root.join("data/x.bin"), 700);
        symlink(root.join("data"), root.join("data_link")).unwrap();
        // A cycle back to the root must not hang the walk.
        symlink(root, root.join("data/loop")).unwrap();

        assert_eq!(get_size(root), 700);
        assert_eq!(get_size(&root.join("data/loop")), 700);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_counts_zero_but_siblings_count() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let locked = root.join("locked");
        fs::create_dir(&locked).unwrap();
        write_bytes(&locked.join("hidden.bin"), 999);
        write_bytes(&root.join("visible.bin"), 50);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let still_readable = fs::read_dir(&locked).is_ok();
        let total = get_size(root);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Privileged users can read the locked dir anyway.
        if still_readable {
            return;
        }
        assert_eq!(total, 50);
    }
}
