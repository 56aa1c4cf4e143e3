use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Create `dir` and any missing parents; an existing directory is fine.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Move `src` to `dst`, replacing `dst` if the platform rename does.
/// Falls back to copy + remove when a plain rename is refused (e.g. across devices).
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(src = %src.display(), dst = %dst.display(), err = %e, "rename failed, copying");
            fs::copy(src, dst)?;
            fs::remove_file(src)
        }
    }
}

/// Best-effort removal of an empty directory. Returns whether it is gone now
/// because of this call; callers are free to ignore the result.
pub fn try_remove_dir(dir: &Path) -> bool {
    match fs::remove_dir(dir) {
        Ok(()) => true,
        Err(e) => {
            debug!(dir = %dir.display(), err = %e, "directory not removed");
            false
        }
    }
}

/// `name` as a relative path with `.` segments dropped, or `None` when it is
/// absolute, climbs with `..`, or names nothing.
pub fn contained_path(name: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for c in Path::new(name).components() {
        match c {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!out.as_os_str().is_empty()).then_some(out)
}
