use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The set of file extensions recognized as C/C++ sources.
///
/// Constructed once at startup and passed into [`discover`]; the contents
/// are fixed, not user-configurable. Matching is case-sensitive on the
/// final extension component, so `x.CPP` is not a source file.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionFilter {
    extensions: &'static [&'static str],
}

impl ExtensionFilter {
    /// C/C++ source and header extensions: `.c`, `.h`, `.cpp`, `.hpp`, `.inl`.
    pub const fn c_family() -> Self {
        Self {
            extensions: &["c", "h", "cpp", "hpp", "inl"],
        }
    }

    /// Whether the final extension of `path` is in the allow-list.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| self.extensions.iter().any(|allowed| ext == *allowed))
    }
}

/// Walk each root in order, yielding every regular file whose extension
/// matches `filter`.
///
/// Order within a directory is whatever the platform walk yields; callers
/// must not rely on it. Symlinks are not followed. A root that does not
/// exist (or an entry that cannot be read) contributes nothing rather than
/// failing the walk.
pub fn discover<'a>(
    roots: &'a [PathBuf],
    filter: &'a ExtensionFilter,
) -> impl Iterator<Item = PathBuf> + 'a {
    roots.iter().flat_map(move |root| {
        WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(move |path| filter.matches(path))
    })
}
