//! Content rendering for stencil templates.
//! Runs a template body through the ordered transformation pipeline and
//! rewrites template file names.

use crate::cases::convert_cases;
use crate::conditions::replace_if_statements;
use crate::error::Result;
use crate::options::RenderOptions;
use crate::replace::{replace_date_time, replace_env_variables, replace_search_items};

/// Runs a template body through the transformation pipeline:
/// conditional resolution, search/replace substitution, environment
/// substitution, date/time substitution, case conversion — strictly in that
/// order, each pass consuming the previous pass's output.
///
/// Content passes through verbatim when `should_replace_file_content` is
/// false.
pub fn render_content(content: &str, options: &RenderOptions) -> Result<String> {
    if !options.should_replace_file_content {
        return Ok(content.to_string());
    }

    let content = replace_if_statements(&options.if_statements, content);
    let content = replace_search_items(
        &options.search_and_replace,
        &content,
        options.config_dir.as_deref(),
    )?;
    let content = replace_env_variables(&content);
    let content = replace_date_time(&content);

    Ok(convert_cases(&content))
}

/// Computes the output name for a template file or directory.
///
/// When `should_replace_file_name` is set, every literal occurrence of
/// `file_name_text_to_be_replaced` in the template's base name is substituted
/// with the target file name; otherwise the base name is reused verbatim.
pub fn render_file_name(template_file_name: &str, options: &RenderOptions) -> String {
    if options.should_replace_file_name && !options.file_name_text_to_be_replaced.is_empty() {
        template_file_name.replace(&options.file_name_text_to_be_replaced, &options.file_name)
    } else {
        template_file_name.to_string()
    }
}
