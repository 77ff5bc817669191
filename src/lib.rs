//! stencil is a template materialization engine for project scaffolding.
//! It creates files and directory trees from reusable per-project templates,
//! applying an ordered chain of deterministic text transformations to every
//! generated file.

/// Case conversion for the `#(text, caseLabel)` placeholder
pub mod cases;

/// Command-line interface module for the stencil application
pub mod cli;

/// Conditional `#IF(content, LABEL)` directive resolution
pub mod conditions;

/// Configuration handling for stencil
/// Locates, parses and validates stencil.config.json
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Error types and handling for the stencil application
pub mod error;

/// onFileCreated hook processing
pub mod hooks;

/// Logger configuration
pub mod logger;

/// Option merging, `{fileName}` interpolation and path normalization
pub mod options;

/// Core template materialization
/// Combines all components to generate the final output
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Search/replace, environment and date/time substitution passes
pub mod replace;

/// Content pipeline orchestration and file name rewriting
pub mod renderer;
