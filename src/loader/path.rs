// Fri Oct 16 2026 - Alex

use std::path::{Component, Path, PathBuf};

/// Resolves `value` against `base` the way a shell user expects: relative
/// paths hang off the working directory, absolute ones are kept, and `.`/`..`
/// segments are folded lexically without touching the filesystem.
pub fn resolve<B: AsRef<Path>, V: AsRef<Path>>(base: B, value: V) -> PathBuf {
    let joined = base.as_ref().join(value.as_ref());
    normalize(&joined)
}

pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(segment) => out.push(segment),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }

    out
}
