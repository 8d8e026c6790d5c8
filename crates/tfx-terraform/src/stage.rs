use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::TerraformError;

/// Entries never copied into a staged module: local provider caches and
/// state belong to whichever invocation created them.
const SKIPPED: &[&str] = &[
    ".terraform",
    "terraform.tfstate",
    "terraform.tfstate.backup",
];

/// A module directory copied under a fresh temp dir.
///
/// Parallel scenarios applying the same module must not share a working
/// directory — `terraform init` and local state would collide. Staging
/// gives each scenario its own copy; the temp dir lives as long as the
/// handle.
pub struct StagedModule {
    // Field order matters for Drop: remove the copy after `path` users are gone.
    path: PathBuf,
    _dir: TempDir,
}

impl StagedModule {
    /// Copy `module_dir` into a new temp dir, skipping provider caches
    /// and state files.
    pub fn stage(module_dir: &Path) -> Result<Self, TerraformError> {
        let name = module_dir
            .file_name()
            .ok_or_else(|| {
                TerraformError::InvalidOptions(format!(
                    "module directory '{}' has no final component",
                    module_dir.display()
                ))
            })?
            .to_os_string();

        let dir = TempDir::new()?;
        let dest = dir.path().join(name);
        copy_tree(module_dir, &dest)?;
        debug!(
            from = %module_dir.display(),
            to = %dest.display(),
            "staged module copy",
        );

        Ok(Self {
            path: dest,
            _dir: dir,
        })
    }

    /// Path of the staged copy; use it as the options' module directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn copy_tree(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        if SKIPPED.iter().any(|skip| name.as_os_str() == *skip) {
            continue;
        }
        let target = dst.join(&name);
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
