//! Enforces that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    /// Relative paths of every `.rs` file and directory below `root`
    fn rust_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn src_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = rust_paths(Path::new("src"))
            .unwrap_or_else(|error| unreachable!("cannot read src: {error}"));
        let unit = rust_paths(Path::new("tests/unit")).unwrap_or_default();
        (src, unit)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (src, unit) = src_and_unit_paths();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_exempt(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let (src, unit) = src_and_unit_paths();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a matching source file:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let tests_root = Path::new("tests");
        let paths = rust_paths(tests_root)
            .unwrap_or_else(|error| unreachable!("cannot read tests: {error}"));

        let empty: Vec<&String> = paths
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(tests_root.join(path.as_str()))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function: {empty:?}"
        );
    }
}
