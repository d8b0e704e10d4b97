use cargo_metadata::MetadataCommand;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ExtractError, Result};

/// A Rust source file to extract from.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

/// Collects source files from explicit paths, folders and Cargo workspaces.
///
/// Files keep the order they were added in. A file reached twice, under any
/// spelling of its path, is kept once.
#[derive(Default)]
pub struct ProjectLoader {
    files: Vec<SourceFile>,
    seen: HashSet<PathBuf>,
}

impl ProjectLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_files(self) -> Vec<SourceFile> {
        self.files
    }

    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let display = path.display().to_string();
        let io_err = |source: std::io::Error| ExtractError::Io {
            path: display.clone(),
            source,
        };
        let canonical = fs::canonicalize(path).map_err(io_err)?;
        if !self.seen.insert(canonical) {
            debug!(path = %path.display(), "already loaded");
            return Ok(());
        }
        let content = fs::read_to_string(path).map_err(io_err)?;
        self.files.push(SourceFile {
            path: display,
            content,
        });
        Ok(())
    }

    /// Recursively add every `*.rs` under `dir`, skipping `target` and `.git`.
    /// Entries are visited in sorted order so repeated runs see the same sequence.
    pub fn add_folder(&mut self, dir: &Path) -> Result<()> {
        if dir.ends_with("target") || dir.ends_with(".git") {
            return Ok(());
        }
        if dir.is_file() {
            return if is_rust_source(dir) { self.add_file(dir) } else { Ok(()) };
        }

        let io_err = |source: std::io::Error| ExtractError::Io {
            path: dir.display().to_string(),
            source,
        };
        let mut entries = fs::read_dir(dir)
            .map_err(io_err)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(io_err)?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                self.add_folder(&path)?;
            } else if is_rust_source(&path) {
                self.add_file(&path)?;
            }
        }
        Ok(())
    }

    /// Add the sources of every workspace member's lib, bin and proc-macro targets.
    pub fn add_workspace(&mut self, manifest_path: &Path) -> Result<()> {
        let metadata = MetadataCommand::new()
            .manifest_path(manifest_path)
            .no_deps()
            .exec()
            .map_err(|e| ExtractError::Workspace(e.to_string()))?;

        for package_id in &metadata.workspace_members {
            let Some(package) = metadata.packages.iter().find(|p| &p.id == package_id) else {
                continue;
            };
            for target in &package.targets {
                if !target.kind.iter().any(|k| k == "lib" || k == "bin" || k == "proc-macro") {
                    continue;
                }
                let src_path = target.src_path.as_std_path();
                let src_dir = src_path.parent().unwrap_or(src_path);
                debug!(package = %package.name, dir = %src_dir.display(), "loading workspace target");
                self.add_folder(src_dir)?;
            }
        }
        Ok(())
    }
}

fn is_rust_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
}
