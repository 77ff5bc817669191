//! onFileCreated hook processing.
//! Hooks are external executables resolved through a path-keyed registry at
//! run start; a hook receives the created file's path and the source template
//! path as JSON on stdin.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;

use crate::constants::HOOK_ENTRY_FILE;
use crate::error::{Error, Result};
use serde::Serialize;

/// Context passed to the hook for every created file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookContext<'a> {
    pub file_path: &'a Path,
    pub template_path: &'a Path,
}

/// Capability interface for post-creation hooks. Injectable in tests.
pub trait HookProvider: Send + Sync {
    fn on_file_created(&self, context: &HookContext) -> Result<()>;
}

/// Provider used when no `hooksPath` is configured.
pub struct NoopHook;

impl HookProvider for NoopHook {
    fn on_file_created(&self, _context: &HookContext) -> Result<()> {
        Ok(())
    }
}

/// Script-backed hook provider.
///
/// `entry` is `None` when the hooks path exists but carries no entry point;
/// invoking such a provider is a silent no-op.
pub struct ScriptHook {
    entry: Option<PathBuf>,
}

impl ScriptHook {
    /// Loads the hook unit at `hooks_path`.
    ///
    /// A directory's entry point is an `on-file-created` file inside it, a
    /// plain file is its own entry point. A missing entry point is not an
    /// error — only a missing `hooks_path` is.
    pub fn load(hooks_path: &Path) -> Result<Self> {
        if !hooks_path.exists() {
            return Err(Error::HookLoadError {
                path: hooks_path.to_path_buf(),
            });
        }

        let entry = if hooks_path.is_dir() {
            let candidate = hooks_path.join(HOOK_ENTRY_FILE);
            candidate.is_file().then_some(candidate)
        } else {
            Some(hooks_path.to_path_buf())
        };

        Ok(Self { entry })
    }

    /// Whether an entry point was found.
    pub fn has_entry(&self) -> bool {
        self.entry.is_some()
    }
}

impl HookProvider for ScriptHook {
    fn on_file_created(&self, context: &HookContext) -> Result<()> {
        match &self.entry {
            Some(entry) => run_hook(entry, context),
            None => Ok(()),
        }
    }
}

/// Executes a hook script, writing the JSON context to its stdin.
pub fn run_hook(script_path: &Path, context: &HookContext) -> Result<()> {
    let payload =
        serde_json::to_string(context).map_err(|e| Error::HookError(e.to_string()))?;

    let mut child = Command::new(script_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            Error::HookError(format!("failed to spawn '{}': {}", script_path.display(), e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(payload.as_bytes()).map_err(Error::IoError)?;
    }

    let status = child.wait().map_err(Error::IoError)?;

    if !status.success() {
        return Err(Error::HookError(format!(
            "Hook failed with status: {}",
            status
        )));
    }

    Ok(())
}

/// Resolves hook providers by path at run start.
///
/// Pre-registered providers (tests, embedders) win over the script-backed
/// default.
#[derive(Default)]
pub struct HookRegistry {
    providers: HashMap<PathBuf, Arc<dyn HookProvider>>,
}

impl HookRegistry {
    pub fn register(&mut self, path: impl Into<PathBuf>, provider: Arc<dyn HookProvider>) {
        self.providers.insert(path.into(), provider);
    }

    /// Resolves the provider for `hooks_path`.
    ///
    /// # Errors
    /// * `Error::HookLoadError` if the path is set but does not exist
    pub fn resolve(&self, hooks_path: Option<&Path>) -> Result<Arc<dyn HookProvider>> {
        let Some(path) = hooks_path else {
            return Ok(Arc::new(NoopHook));
        };

        if let Some(provider) = self.providers.get(path) {
            return Ok(provider.clone());
        }

        Ok(Arc::new(ScriptHook::load(path)?))
    }
}
