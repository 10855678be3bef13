#[cfg(test)]
mod tests {
    use crate::generator::ScriptError;
    use crate::walker::{EntryKind, walk};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn relative_names(root: &Path) -> Vec<(String, EntryKind)> {
        walk(root)
            .unwrap()
            .into_iter()
            .map(|entry| {
                let rel = entry.path.strip_prefix(root).unwrap();
                (rel.to_string_lossy().replace('\\', "/"), entry.kind)
            })
            .collect()
    }

    #[test]
    fn test_empty_root_yields_only_root() {
        let tmp = TempDir::new().unwrap();
        let entries = walk(tmp.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].depth, 0);
        assert!(entries[0].is_dir());
    }

    #[test]
    fn test_siblings_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zeta.txt"), b"z").unwrap();
        fs::write(tmp.path().join("Alpha.txt"), b"A").unwrap();
        fs::write(tmp.path().join("beta.txt"), b"b").unwrap();

        let names = relative_names(tmp.path());
        let names: Vec<_> = names.iter().map(|(n, _)| n.as_str()).collect();

        // Ordinal order puts uppercase before lowercase
        assert_eq!(names, vec!["", "Alpha.txt", "beta.txt", "zeta.txt"]);
    }

    #[test]
    fn test_directory_precedes_its_contents() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/inner")).unwrap();
        fs::write(tmp.path().join("a/inner/deep.bin"), b"x").unwrap();
        fs::write(tmp.path().join("a/file.txt"), b"x").unwrap();
        fs::write(tmp.path().join("b.txt"), b"x").unwrap();

        let names = relative_names(tmp.path());
        assert_eq!(
            names,
            vec![
                ("".to_string(), EntryKind::Dir),
                ("a".to_string(), EntryKind::Dir),
                ("a/file.txt".to_string(), EntryKind::File),
                ("a/inner".to_string(), EntryKind::Dir),
                ("a/inner/deep.bin".to_string(), EntryKind::File),
                ("b.txt".to_string(), EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_depth_tracks_nesting() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("one/two")).unwrap();
        fs::write(tmp.path().join("one/two/three"), b"3").unwrap();

        let depths: Vec<_> = walk(tmp.path()).unwrap().iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_missing_root_is_walk_error() {
        let tmp = TempDir::new().unwrap();
        let result = walk(&tmp.path().join("missing"));

        assert!(matches!(result, Err(ScriptError::Walk { .. })));
    }

    #[test]
    fn test_file_root_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, b"data").unwrap();

        let result = walk(&file);
        assert!(matches!(result, Err(ScriptError::RootNotDirectory(_))));
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_followed() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("linked.txt"), b"l").unwrap();
        std::os::unix::fs::symlink(outside.path(), tmp.path().join("link")).unwrap();

        let names = relative_names(tmp.path());
        assert_eq!(
            names,
            vec![
                ("".to_string(), EntryKind::Dir),
                ("link".to_string(), EntryKind::Dir),
                ("link/linked.txt".to_string(), EntryKind::File),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("dir")).unwrap();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("dir/back")).unwrap();

        let result = walk(tmp.path());
        assert!(matches!(result, Err(ScriptError::Walk { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_file() {
        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("dangling"))
            .unwrap();

        let names = relative_names(tmp.path());
        assert_eq!(
            names,
            vec![
                ("".to_string(), EntryKind::Dir),
                ("dangling".to_string(), EntryKind::File),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_self_referencing_symlink_is_file() {
        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink("selfy", tmp.path().join("selfy")).unwrap();

        let names = relative_names(tmp.path());
        assert_eq!(
            names,
            vec![
                ("".to_string(), EntryKind::Dir),
                ("selfy".to_string(), EntryKind::File),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_through_regular_file_is_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        std::os::unix::fs::symlink("a.txt/x", tmp.path().join("b")).unwrap();

        let names = relative_names(tmp.path());
        assert_eq!(
            names,
            vec![
                ("".to_string(), EntryKind::Dir),
                ("a.txt".to_string(), EntryKind::File),
                ("b".to_string(), EntryKind::File),
            ]
        );
    }
}
