//! Option handling for stencil generation runs.
//! Merges per-template defaults with caller-supplied values, interpolates the
//! `{fileName}` placeholder and canonicalizes path-valued fields relative to
//! the configuration folder.

use crate::config::{Config, IfStatementItem, SearchAndReplaceItem, TemplateConfig};
use crate::constants::{DEFAULT_SEARCH_AND_REPLACE_SEPARATOR, FILE_NAME_PLACEHOLDER};
use crate::error::{Error, Result};
use crate::replace::create_search_and_replace_items;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// The partially-specified option bundle carried by a template configuration
/// or supplied through the command line. Every field is optional; merging and
/// defaulting happen in [`resolve_options`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_replace_file_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_replace_file_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name_text_to_be_replaced: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_to_be_replaced: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_text_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_and_replace_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_and_replace: Option<Vec<SearchAndReplaceItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_statements: Option<Vec<IfStatementItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<PathBuf>,
}

/// The finalized, immutable option set controlling one generation run.
/// Passed by reference down the materialization recursion; only the
/// template/destination paths vary per node.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Name of the selected template
    pub template: String,
    /// Output file name, substituted into names and `{fileName}` occurrences
    pub file_name: String,
    /// Destination directory
    pub dir_path: PathBuf,
    /// Template source file or directory
    pub template_path: PathBuf,
    /// Gates the content transformation pipeline
    pub should_replace_file_content: bool,
    /// Gates file name rewriting
    pub should_replace_file_name: bool,
    /// Literal text substituted with `file_name` in template file names
    pub file_name_text_to_be_replaced: String,
    /// Effective search/replace item list: pair items merged with explicit
    /// items, orders defaulted, stable-sorted ascending
    pub search_and_replace: Vec<SearchAndReplaceItem>,
    pub if_statements: Vec<IfStatementItem>,
    pub hooks_path: Option<PathBuf>,
    /// Base directory for resolving relative `injectFile` paths
    pub config_dir: Option<PathBuf>,
}

/// Lexically canonicalizes a path: collapses `.` and `..` segments without
/// touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
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
        PathBuf::from(".")
    } else {
        out
    }
}

/// Strips root/prefix components so an absolute path can be re-joined under
/// another base.
fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

fn normalize_against(path: &Path, config_folder: &Path) -> PathBuf {
    let normalized = normalize_path(path);
    if normalized.is_absolute()
        && !config_folder.as_os_str().is_empty()
        && !normalized.starts_with(config_folder)
    {
        // authored "as if rooted at the config file": re-anchor under the
        // configuration folder
        config_folder.join(strip_root(&normalized))
    } else {
        normalized
    }
}

/// Canonicalizes the path-valued fields of an option bundle.
///
/// Applies to `dirPath`, `templatePath`, `hooksPath`, `configDir` and the
/// `replace` value of every `injectFile` search item. Absolute paths outside
/// `config_folder` are re-anchored under it; relative paths and absent fields
/// pass through unchanged.
pub fn normalize_options(options: &mut TemplateOptions, config_folder: &Path) {
    let normalize_if_exists = |value: &mut Option<PathBuf>| {
        if let Some(path) = value {
            *path = normalize_against(path, config_folder);
        }
    };

    normalize_if_exists(&mut options.dir_path);
    normalize_if_exists(&mut options.template_path);
    normalize_if_exists(&mut options.hooks_path);
    normalize_if_exists(&mut options.config_dir);

    if let Some(items) = &mut options.search_and_replace {
        for item in items.iter_mut().filter(|item| item.inject_file) {
            item.replace = normalize_against(Path::new(&item.replace), config_folder)
                .to_string_lossy()
                .into_owned();
        }
    }
}

/// Merges two partial bundles; `overrides` wins field by field.
pub fn merge_options(overrides: &TemplateOptions, base: &TemplateOptions) -> TemplateOptions {
    macro_rules! pick {
        ($field:ident) => {
            overrides.$field.clone().or_else(|| base.$field.clone())
        };
    }

    TemplateOptions {
        file_name: pick!(file_name),
        dir_path: pick!(dir_path),
        template_path: pick!(template_path),
        should_replace_file_content: pick!(should_replace_file_content),
        should_replace_file_name: pick!(should_replace_file_name),
        file_name_text_to_be_replaced: pick!(file_name_text_to_be_replaced),
        text_to_be_replaced: pick!(text_to_be_replaced),
        replace_text_with: pick!(replace_text_with),
        search_and_replace_separator: pick!(search_and_replace_separator),
        search_and_replace: pick!(search_and_replace),
        if_statements: pick!(if_statements),
        hooks_path: pick!(hooks_path),
        config_dir: pick!(config_dir),
    }
}

/// Builds the finalized option set for one generation run.
///
/// Caller-supplied values win over the template's; `{fileName}` is
/// interpolated; the effective search/replace list is built here so a
/// `textToBeReplaced`/`replaceTextWith` length mismatch fails before any file
/// is written.
pub fn resolve_options(
    overrides: &TemplateOptions,
    template: &TemplateConfig,
    file_name: &str,
    config: &Config,
) -> Result<RenderOptions> {
    let merged = merge_options(overrides, &template.options);

    let interpolate = |value: &str| value.replace(FILE_NAME_PLACEHOLDER, file_name);

    let template_path = merged
        .template_path
        .as_ref()
        .map(|path| PathBuf::from(interpolate(&path.to_string_lossy())))
        .ok_or_else(|| {
            Error::ConfigError(format!("Template '{}' has no templatePath", template.name))
        })?;
    let dir_path = merged
        .dir_path
        .as_ref()
        .map(|path| PathBuf::from(interpolate(&path.to_string_lossy())))
        .unwrap_or_else(|| PathBuf::from("."));

    let explicit_items: Vec<SearchAndReplaceItem> = merged
        .search_and_replace
        .unwrap_or_default()
        .into_iter()
        .map(|item| SearchAndReplaceItem {
            search: interpolate(&item.search),
            replace: interpolate(&item.replace),
            ..item
        })
        .collect();

    let separator = merged
        .search_and_replace_separator
        .unwrap_or_else(|| DEFAULT_SEARCH_AND_REPLACE_SEPARATOR.to_string());

    let search_and_replace = create_search_and_replace_items(
        merged.text_to_be_replaced.map(|v| interpolate(&v)).as_deref(),
        merged.replace_text_with.map(|v| interpolate(&v)).as_deref(),
        &separator,
        &explicit_items,
    )?;

    Ok(RenderOptions {
        template: template.name.clone(),
        file_name: file_name.to_string(),
        dir_path,
        template_path,
        should_replace_file_content: merged.should_replace_file_content.unwrap_or(true),
        should_replace_file_name: merged.should_replace_file_name.unwrap_or(true),
        file_name_text_to_be_replaced: merged.file_name_text_to_be_replaced.unwrap_or_default(),
        search_and_replace,
        if_statements: merged.if_statements.unwrap_or_default(),
        hooks_path: merged.hooks_path,
        config_dir: merged.config_dir.or_else(|| {
            (!config.folder.as_os_str().is_empty()).then(|| config.folder.clone())
        }),
    })
}
