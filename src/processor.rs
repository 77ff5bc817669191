//! Core template materialization.
//! Recursively reproduces a template file or directory tree under a
//! destination path, delegating file bodies to the rendering pipeline and
//! invoking the post-creation hook for every created file.

use log::{debug, error, info};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::hooks::{HookContext, HookProvider};
use crate::options::RenderOptions;
use crate::renderer::{render_content, render_file_name};

pub fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn create_file_and_write_content(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates a directory and its missing parents; creating an already-existing
/// directory is not an error.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDirError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn is_directory(path: &Path) -> Result<bool> {
    let metadata = fs::metadata(path).map_err(|source| Error::StatError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(metadata.is_dir())
}

/// Gets the paths of a directory's immediate children.
pub fn inner_directories_and_files_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    fs::read_dir(dir_path)
        .map_err(|source| Error::ListDirError {
            path: dir_path.to_path_buf(),
            source,
        })?
        .map(|entry| {
            entry.map(|e| e.path()).map_err(|source| Error::ListDirError {
                path: dir_path.to_path_buf(),
                source,
            })
        })
        .collect()
}

fn resolve_path(path: &Path, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn template_base_name(template_path: &Path) -> Result<&str> {
    template_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::ConfigError(format!(
                "Invalid template path: '{}'",
                template_path.display()
            ))
        })
}

/// Materializes template trees.
///
/// Sibling nodes are processed concurrently; every dispatched child completes
/// before its parent call returns. Read/write/mkdir failures are fatal for
/// the affected subtree; hook failures are caught and logged.
pub struct Processor<'a> {
    /// Base for resolving relative template/destination paths
    base_dir: &'a Path,
    hooks: Arc<dyn HookProvider>,
}

impl<'a> Processor<'a> {
    pub fn new(base_dir: &'a Path, hooks: Arc<dyn HookProvider>) -> Self {
        Self { base_dir, hooks }
    }

    /// Creates all directories and files described by the options.
    ///
    /// The destination directory is created first; a template directory then
    /// materializes each immediate child directly into it, a template file
    /// materializes as a single output file.
    pub fn create_all(&self, options: &RenderOptions) -> Result<()> {
        let template_path = resolve_path(&options.template_path, self.base_dir);
        let dir_path = resolve_path(&options.dir_path, self.base_dir);

        debug!("Materializing template: {}", template_path.display());
        create_directory(&dir_path)?;

        if is_directory(&template_path)? {
            inner_directories_and_files_paths(&template_path)?
                .par_iter()
                .try_for_each(|child| self.create_file_or_directory(child, &dir_path, options))
        } else {
            self.create_file_or_directory(&template_path, &dir_path, options)
        }
    }

    /// Materializes one template node (file or directory) into `dest_dir`.
    pub fn create_file_or_directory(
        &self,
        template_path: &Path,
        dest_dir: &Path,
        options: &RenderOptions,
    ) -> Result<()> {
        if is_directory(template_path)? {
            self.create_directory_from_template(template_path, dest_dir, options)
        } else {
            self.create_file_from_template(template_path, dest_dir, options)
        }
    }

    fn create_directory_from_template(
        &self,
        template_path: &Path,
        dest_dir: &Path,
        options: &RenderOptions,
    ) -> Result<()> {
        let dir_name = render_file_name(template_base_name(template_path)?, options);
        let dest_path = dest_dir.join(dir_name);

        create_directory(&dest_path)?;
        debug!("Inner directory created: {}", dest_path.display());

        inner_directories_and_files_paths(template_path)?
            .par_iter()
            .try_for_each(|child| self.create_file_or_directory(child, &dest_path, options))
    }

    fn create_file_from_template(
        &self,
        template_path: &Path,
        dest_dir: &Path,
        options: &RenderOptions,
    ) -> Result<()> {
        let file_name = render_file_name(template_base_name(template_path)?, options);
        let file_path = dest_dir.join(file_name);

        let content = read_file_content(template_path)?;
        let rendered = render_content(&content, options)?;
        create_file_and_write_content(&file_path, &rendered)?;

        let context = HookContext {
            file_path: &file_path,
            template_path,
        };
        if let Err(err) = self.hooks.on_file_created(&context) {
            error!("Error executing onFileCreated hook: {}", err);
        }

        info!("{} created!", file_path.display());
        Ok(())
    }
}
