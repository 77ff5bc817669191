//! User input and interaction handling.

use crate::config::Config;
use crate::error::{Error, Result};
use dialoguer::{Input, Select};

/// Prompts for the output file name.
pub fn prompt_file_name() -> Result<String> {
    Input::<String>::new()
        .with_prompt("Enter the file name")
        .interact_text()
        .map_err(|e| Error::PromptError(e.to_string()))
}

/// Prompts for a template selection among the configured templates, with the
/// default template preselected.
pub fn prompt_template_name(config: &Config) -> Result<String> {
    let names: Vec<&str> = config.templates.iter().map(|t| t.name.as_str()).collect();
    let default_index = names
        .iter()
        .position(|name| *name == config.default_template_name)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Choose a template")
        .items(&names)
        .default(default_index)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    Ok(names[selection].to_string())
}
