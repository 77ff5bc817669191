//! Command-line interface implementation for stencil.
//! Provides argument parsing using clap and conversion of the parsed flags
//! into a partial option bundle.

use crate::options::TemplateOptions;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
///
/// Every generation option can be supplied as a flag; flags win over the
/// values configured for the selected template.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: create files and directories from templates", long_about = None)]
pub struct Args {
    /// Output file name, also substituted for {fileName} occurrences
    #[arg(short = 'n', long)]
    pub file_name: Option<String>,

    /// Name of the template to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Directory where the generated files will be created
    #[arg(long)]
    pub dir_path: Option<PathBuf>,

    /// Path to the template file or directory
    #[arg(long)]
    pub template_path: Option<PathBuf>,

    /// Whether file content runs through the transformation pipeline
    #[arg(long)]
    pub should_replace_file_content: Option<bool>,

    /// Whether template file names are rewritten
    #[arg(long)]
    pub should_replace_file_name: Option<bool>,

    /// Literal text to substitute with the file name in template file names
    #[arg(long)]
    pub file_name_text_to_be_replaced: Option<String>,

    /// Separator-delimited list of texts to search for in file content
    #[arg(long)]
    pub text_to_be_replaced: Option<String>,

    /// Separator-delimited list of replacement texts, parallel to
    /// --text-to-be-replaced
    #[arg(long)]
    pub replace_text_with: Option<String>,

    /// Separator for the two lists above
    #[arg(long)]
    pub search_and_replace_separator: Option<String>,

    /// Path to the hooks file or directory
    #[arg(long)]
    pub hooks_path: Option<PathBuf>,

    /// Base directory for resolving relative injectFile paths
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Converts the parsed flags into a partial option bundle suitable for
    /// merging with a template's configured options.
    pub fn to_template_options(&self) -> TemplateOptions {
        TemplateOptions {
            file_name: self.file_name.clone(),
            dir_path: self.dir_path.clone(),
            template_path: self.template_path.clone(),
            should_replace_file_content: self.should_replace_file_content,
            should_replace_file_name: self.should_replace_file_name,
            file_name_text_to_be_replaced: self.file_name_text_to_be_replaced.clone(),
            text_to_be_replaced: self.text_to_be_replaced.clone(),
            replace_text_with: self.replace_text_with.clone(),
            search_and_replace_separator: self.search_and_replace_separator.clone(),
            search_and_replace: None,
            if_statements: None,
            hooks_path: self.hooks_path.clone(),
            config_dir: self.config_dir.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
