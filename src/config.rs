//! Configuration handling for stencil.
//! Locates `stencil.config.json` by walking upward through ancestor
//! directories, validates it and normalizes its template paths.

use crate::constants::{CONFIG_FILE_NAME, TEMPLATES_DIR_NAME};
use crate::error::{Error, Result};
use crate::options::{normalize_options, normalize_path, TemplateOptions};
use crate::processor::{create_directory, create_file_and_write_content};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A single search/replace transformation item.
///
/// Owned by a template configuration or supplied ad hoc by the caller; the
/// pipeline only defaults its `order` and never mutates it otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAndReplaceItem {
    /// Pattern to search for
    pub search: String,
    /// Replacement text, or a file path when `inject_file` is set
    pub replace: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore_case: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inject_file: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Selects which conditional branches of a template resolve to their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStatementItem {
    pub option: String,
    pub order: i64,
}

/// A named, partially-specified option bundle a caller selects by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub options: TemplateOptions,
}

/// The project configuration, loaded exactly once per invocation.
///
/// `folder` and `path` are derived at resolution time and are not part of
/// the document itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Schema identifier consumers may set; functionally ignored
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub default_template_name: String,
    #[serde(default)]
    pub templates: Vec<TemplateConfig>,
    /// Absolute directory containing the configuration file
    #[serde(skip)]
    pub folder: PathBuf,
    /// Absolute path of the configuration file
    #[serde(skip)]
    pub path: PathBuf,
}

/// Searches for the configuration file starting at `start_dir`, retrying in
/// the parent directory until the filesystem root is reached.
///
/// # Returns
/// * `Ok(None)` if no configuration file exists anywhere up the tree
///
/// # Errors
/// * `Error::ConfigError` if a found document is malformed
/// * `Error::ConfigValidationError` if a found document fails validation
pub fn find_config(start_dir: &Path) -> Result<Option<Config>> {
    let mut dir = normalize_path(start_dir);
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("Loading configuration from {}", candidate.display());
            return load_config(&candidate, &dir).map(Some);
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            // the search path no longer changes: root reached
            None => return Ok(None),
        }
    }
}

fn load_config(config_path: &Path, folder: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path).map_err(|source| Error::ReadError {
        path: config_path.to_path_buf(),
        source,
    })?;

    let mut config: Config = serde_json::from_str(&content).map_err(|e| {
        Error::ConfigError(format!("Invalid {}: {}", config_path.display(), e))
    })?;
    config.folder = folder.to_path_buf();
    config.path = config_path.to_path_buf();

    validate_config(&config)?;

    let folder = config.folder.clone();
    for template in &mut config.templates {
        normalize_options(&mut template.options, &folder);
    }

    Ok(config)
}

/// Validates a loaded configuration.
///
/// Every template must have a non-empty name and every search/replace item a
/// non-empty `search` and `replace`.
pub fn validate_config(config: &Config) -> Result<()> {
    let validation_error = |message: &str| Error::ConfigValidationError {
        config_path: config.path.display().to_string(),
        message: message.to_string(),
    };

    for template in &config.templates {
        if template.name.is_empty() {
            return Err(validation_error("Template name is required"));
        }

        if let Some(items) = &template.options.search_and_replace {
            for item in items {
                if item.search.is_empty() {
                    return Err(validation_error("searchAndReplace 'search' is required"));
                }
                if item.replace.is_empty() {
                    return Err(validation_error("searchAndReplace 'replace' is required"));
                }
            }
        }
    }

    Ok(())
}

/// Finds the template configuration object by name; lookup is by first match.
pub fn get_template_from_config<'a>(
    config: &'a Config,
    template_name: &str,
) -> Option<&'a TemplateConfig> {
    config.templates.iter().find(|t| t.name == template_name)
}

const DEMO_COMPONENT_NAME: &str = "component.tsx";
const DEMO_COMPONENT_CONTENT: &str = r#"import { FC } from 'react';
import styles from './FileName.module.scss';

const FileName: FC = () => {
  return <div className={styles.root}>FileName</div>;
};

export default FileName;
"#;

const DEMO_STYLES_NAME: &str = "component.module.scss";
const DEMO_STYLES_CONTENT: &str = ".root {\n  display: block;\n}\n";

/// The configuration written when none exists yet: a single `component`
/// template backed by a demo template directory.
pub fn default_config() -> Config {
    Config {
        schema: None,
        default_template_name: "component".to_string(),
        templates: vec![TemplateConfig {
            name: "component".to_string(),
            description: None,
            options: TemplateOptions {
                template_path: Some(PathBuf::from("/.stencil/component")),
                dir_path: Some(PathBuf::from("./{fileName}")),
                file_name_text_to_be_replaced: Some("component".to_string()),
                search_and_replace: Some(vec![SearchAndReplaceItem {
                    search: "FileName".to_string(),
                    replace: "{fileName}".to_string(),
                    ..SearchAndReplaceItem::default()
                }]),
                ..TemplateOptions::default()
            },
        }],
        folder: PathBuf::new(),
        path: PathBuf::new(),
    }
}

/// Resolves the configuration, creating a default one (plus its demo
/// template) in `current_dir` when none is found anywhere up the tree.
///
/// # Returns
/// * The resolved configuration and whether it had to be created
pub fn get_or_create_config(current_dir: &Path) -> Result<(Config, bool)> {
    if let Some(config) = find_config(current_dir)? {
        return Ok((config, false));
    }

    let config_path = current_dir.join(CONFIG_FILE_NAME);
    let content = serde_json::to_string_pretty(&default_config())
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    create_file_and_write_content(&config_path, &content)?;
    info!(
        "{} config file has been created: '{}'",
        CONFIG_FILE_NAME,
        config_path.display()
    );

    let demo_dir = current_dir.join(TEMPLATES_DIR_NAME).join("component");
    create_directory(&demo_dir)?;
    create_file_and_write_content(&demo_dir.join(DEMO_COMPONENT_NAME), DEMO_COMPONENT_CONTENT)?;
    create_file_and_write_content(&demo_dir.join(DEMO_STYLES_NAME), DEMO_STYLES_CONTENT)?;
    info!(
        "{} directory has been created: '{}'",
        TEMPLATES_DIR_NAME,
        demo_dir.display()
    );

    match find_config(current_dir)? {
        Some(config) => Ok((config, true)),
        None => Err(Error::ConfigError(
            "Configuration was created but could not be resolved".to_string(),
        )),
    }
}
