use std::path::{Component, Path, PathBuf};

/// Whether `relative` stays inside whatever directory it is joined onto.
///
/// Rejects absolute paths, drive prefixes and `..` components that climb above
/// the starting point. `.` components are ignored.
pub fn is_contained(relative: &Path) -> bool {
    let mut depth: usize = 0;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}

/// Join `relative` onto `root`, or `None` if it would escape `root`.
pub fn join_contained(root: &Path, relative: &Path) -> Option<PathBuf> {
    is_contained(relative).then(|| root.join(relative))
}
