//! Common constants used throughout the stencil application.

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "stencil.config.json";

/// Directory holding the bootstrapped demo template, relative to the
/// configuration folder
pub const TEMPLATES_DIR_NAME: &str = ".stencil";

/// Entry point file looked up when `hooksPath` points to a directory
pub const HOOK_ENTRY_FILE: &str = "on-file-created";

/// Placeholder substituted with the resolved file name while options are
/// merged
pub const FILE_NAME_PLACEHOLDER: &str = "{fileName}";

/// Separator used for `textToBeReplaced`/`replaceTextWith` unless configured
pub const DEFAULT_SEARCH_AND_REPLACE_SEPARATOR: &str = ";";

/// Order assigned to items built from the `textToBeReplaced`/`replaceTextWith`
/// pair lists
pub const DEFAULT_REPLACE_TEXT_WITH_ORDER: i64 = 0;

/// Order assigned to explicit `searchAndReplace` items that don't set one
pub const DEFAULT_SEARCH_AND_REPLACE_ORDER: i64 = 1;
