//! Path utilities for reference resolution
//!
//! Paths are compared lexically: two spellings of the same file
//! (`a.d.ts`, `./a.d.ts`, `dir/../a.d.ts`) normalize to one key.

use std::path::{Component, Path, PathBuf};

const LIB_PREFIX: &str = "lib.";
const DTS_SUFFIX: &str = ".d.ts";

/// Lexically normalize a path: drop `.` and fold `..` into its parent
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is still `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Expand a `lib="..."` name into a declaration file name
///
/// `es2015.core` becomes `lib.es2015.core.d.ts`; names that already carry
/// the prefix or suffix keep them.
pub fn library_file_name(name: &str) -> String {
    let mut file = if name.starts_with(LIB_PREFIX) {
        name.to_string()
    } else {
        format!("{LIB_PREFIX}{name}")
    };
    if !file.ends_with(DTS_SUFFIX) {
        file.push_str(DTS_SUFFIX);
    }
    file
}

/// Resolve a referenced library against the file that references it
pub fn resolve_reference(referrer: &Path, name: &str) -> PathBuf {
    let file = PathBuf::from(library_file_name(name));
    if file.is_absolute() {
        return normalize_path(&file);
    }
    let dir = referrer.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&dir.join(file))
}

/// Final path component, used in info markers
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
