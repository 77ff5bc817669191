//! stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration resolution and
//! coordinates interactions between different modules.

use stencil::{
    cli::{get_args, Args},
    config::{get_or_create_config, get_template_from_config},
    error::{default_error_handler, Error, Result},
    hooks::HookRegistry,
    logger::init_logger,
    options::resolve_options,
    processor::Processor,
    prompt::{prompt_file_name, prompt_template_name},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration, bootstrapping a default one if necessary
/// 2. Selects the template (flag, single candidate or interactive prompt)
/// 3. Resolves the file name (flag or interactive prompt)
/// 4. Finalizes the option set and resolves the hook provider
/// 5. Materializes the template tree
fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir().map_err(Error::IoError)?;

    let (config, _created) = get_or_create_config(&current_dir)?;

    let template_name = match &args.template {
        Some(name) => name.clone(),
        None if config.templates.len() > 1 => prompt_template_name(&config)?,
        None => config.default_template_name.clone(),
    };

    let template = get_template_from_config(&config, &template_name).ok_or_else(|| {
        Error::ConfigError(format!(
            "Template '{}' was not found in {}",
            template_name,
            config.path.display()
        ))
    })?;

    let file_name = match &args.file_name {
        Some(name) => name.clone(),
        None => prompt_file_name()?,
    };

    let options = resolve_options(&args.to_template_options(), template, &file_name, &config)?;

    let registry = HookRegistry::default();
    let hooks = registry.resolve(options.hooks_path.as_deref())?;

    let processor = Processor::new(&current_dir, hooks);
    processor.create_all(&options)?;

    println!(
        "'{}' has been created successfully in '{}'.",
        file_name,
        options.dir_path.display()
    );
    Ok(())
}
