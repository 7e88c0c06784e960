//! Scoped checkout directory for one deployment run

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{DeployChangesError, Result};

/// A checkout directory owned by one run.
///
/// The directory is removed when the guard drops, on success, on error and on
/// unwinding. Removal failures are logged and swallowed so they never mask the
/// error that ended the run.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    /// Claim `<root>/<name>`, deleting whatever a previous run left there.
    ///
    /// `name` must be a single plain directory name; anything that would
    /// resolve to `root` itself or outside it is refused before any removal.
    pub fn prepare(root: &Path, name: &str) -> Result<Self> {
        if !is_plain_name(name) {
            return Err(DeployChangesError::config(format!(
                "'{}' is not a valid workspace directory name",
                name
            )));
        }

        let path = root.join(name);
        remove_if_present(&path)?;

        Ok(Workspace { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = remove_if_present(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "workspace cleanup failed");
        }
    }
}

fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn remove_if_present(path: &Path) -> Result<()> {
    if path.exists() {
        tracing::info!("Deleting '{}' folder", path.display());
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_removes_stale_directory() {
        let root = tempfile::tempdir().unwrap();
        let stale = root.path().join("storefront");
        fs::create_dir_all(stale.join("leftover")).unwrap();

        let workspace = Workspace::prepare(root.path(), "storefront").unwrap();
        assert_eq!(workspace.path(), stale.as_path());
        assert!(!stale.exists());
    }

    #[test]
    fn test_drop_removes_directory() {
        let root = tempfile::tempdir().unwrap();
        let path = {
            let workspace = Workspace::prepare(root.path(), "storefront").unwrap();
            fs::create_dir_all(workspace.path().join(".git")).unwrap();
            workspace.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_prepare_refuses_names_outside_root() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("root");
        fs::create_dir_all(root.join("precious")).unwrap();
        fs::write(parent.path().join("sibling.txt"), "keep").unwrap();

        for name in ["", ".", "..", "a/b", "/etc", "../root"] {
            let err = Workspace::prepare(&root, name).unwrap_err();
            assert!(matches!(err, DeployChangesError::Config(_)), "{:?}", name);
        }

        assert!(root.join("precious").is_dir());
        assert!(parent.path().join("sibling.txt").exists());
    }

    #[test]
    fn test_drop_without_directory_is_quiet() {
        let root = tempfile::tempdir().unwrap();
        let workspace = Workspace::prepare(root.path(), "never-cloned").unwrap();
        let path = workspace.path().to_path_buf();
        drop(workspace);
        assert!(!path.exists());
    }
}
