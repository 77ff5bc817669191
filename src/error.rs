//! Error handling for the stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for stencil operations.
///
/// This enum represents all possible errors that can occur within the stencil
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures of a loaded configuration file
    #[error("Invalid {config_path}: {message}.")]
    ConfigValidationError { config_path: String, message: String },

    /// The `textToBeReplaced`/`replaceTextWith` lists split into a different
    /// number of segments
    #[error("textToBeReplaced and replaceTextWith arguments length mismatch: {text_to_be_replaced} vs {replace_text_with} segments.")]
    ReplacePairMismatchError {
        text_to_be_replaced: usize,
        replace_text_with: usize,
    },

    /// A search item's pattern failed to compile
    #[error("Invalid search pattern '{pattern}': {source}.")]
    PatternError {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("Couldn't read file content from path: '{path}'.")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't create file: '{path}'.")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't create directory for path: '{path}'.")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't get files paths from folder: '{path}'.")]
    ListDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't determine if the provided path is a directory: '{path}'.")]
    StatError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured hooks path does not exist on disk
    #[error("Hooks file not found. Path: '{path}'.")]
    HookLoadError { path: PathBuf },

    /// Represents errors that occur during hook execution
    #[error("Hook execution error: {0}.")]
    HookError(String),

    /// Represents errors during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
