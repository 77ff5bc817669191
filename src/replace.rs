//! Search/replace, environment and date/time substitution passes.
//!
//! The search/replace working list merges the positional
//! `textToBeReplaced`/`replaceTextWith` pairs with the explicitly configured
//! items and stable-sorts them by `order`, so ties keep their input order.

use crate::config::SearchAndReplaceItem;
use crate::constants::{DEFAULT_REPLACE_TEXT_WITH_ORDER, DEFAULT_SEARCH_AND_REPLACE_ORDER};
use crate::error::{Error, Result};
use crate::processor::read_file_content;
use chrono::{DateTime, Local, TimeZone};
use log::warn;
use regex::{Regex, RegexBuilder};
use std::fmt::Write;
use std::path::Path;
use std::sync::OnceLock;

/// Builds the effective search/replace item list for one generation run.
///
/// Pair items split from `text_to_be_replaced`/`replace_text_with` come
/// first with a fixed low default order; explicit items without an `order`
/// get a distinct default, so they apply after the pair items unless they
/// request otherwise.
///
/// # Errors
/// * `Error::ReplacePairMismatchError` if the two pair lists split into a
///   different number of segments
pub fn create_search_and_replace_items(
    text_to_be_replaced: Option<&str>,
    replace_text_with: Option<&str>,
    separator: &str,
    search_and_replace: &[SearchAndReplaceItem],
) -> Result<Vec<SearchAndReplaceItem>> {
    let split = |value: Option<&str>| -> Vec<String> {
        value
            .map(|value| value.split(separator).map(str::to_string).collect())
            .unwrap_or_default()
    };

    let searches = split(text_to_be_replaced);
    let replacements = split(replace_text_with);

    if searches.len() != replacements.len() {
        return Err(Error::ReplacePairMismatchError {
            text_to_be_replaced: searches.len(),
            replace_text_with: replacements.len(),
        });
    }

    let mut items: Vec<SearchAndReplaceItem> = searches
        .into_iter()
        .zip(replacements)
        .map(|(search, replace)| SearchAndReplaceItem {
            search,
            replace,
            ignore_case: false,
            inject_file: false,
            order: Some(DEFAULT_REPLACE_TEXT_WITH_ORDER),
        })
        .collect();

    items.extend(search_and_replace.iter().map(|item| SearchAndReplaceItem {
        order: Some(item.order.unwrap_or(DEFAULT_SEARCH_AND_REPLACE_ORDER)),
        ..item.clone()
    }));

    // Vec::sort_by_key is stable; ties keep their input order
    items.sort_by_key(|item| item.order);

    Ok(items)
}

/// Applies the item list sequentially against the text-so-far.
///
/// Every `search` is a pattern; all non-overlapping occurrences are replaced.
/// `inject_file` items resolve `replace` as a path (relative paths against
/// `config_dir`) and substitute that file's content, read at the moment the
/// item is applied.
pub fn replace_search_items(
    items: &[SearchAndReplaceItem],
    content: &str,
    config_dir: Option<&Path>,
) -> Result<String> {
    let mut content = content.to_string();

    for item in items {
        let pattern = RegexBuilder::new(&item.search)
            .case_insensitive(item.ignore_case)
            .build()
            .map_err(|e| Error::PatternError {
                pattern: item.search.clone(),
                source: Box::new(e),
            })?;

        let replacement = if item.inject_file {
            let path = Path::new(&item.replace);
            match config_dir {
                Some(base) if path.is_relative() => read_file_content(&base.join(path))?,
                _ => read_file_content(path)?,
            }
        } else {
            item.replace.clone()
        };

        content = pattern
            .replace_all(&content, replacement.as_str())
            .into_owned();
    }

    Ok(content)
}

fn env_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{env:([^}]+)\}").unwrap())
}

fn date_time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{dateTimeNow:([^}]+)\}").unwrap())
}

/// Replaces every `{env:NAME}` occurrence with the value of the named
/// environment variable, resolved through `lookup`.
///
/// An unset variable leaves the placeholder verbatim and emits one warning
/// per occurrence.
pub fn replace_env_variables_with<F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_pattern()
        .replace_all(text, |caps: &regex::Captures| {
            let name = &caps[1];
            match lookup(name) {
                Some(value) => value,
                None => {
                    warn!("Environment variable {} not found!", name);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Replaces every `{env:NAME}` occurrence with the process environment value.
pub fn replace_env_variables(text: &str) -> String {
    replace_env_variables_with(text, |name| std::env::var(name).ok())
}

/// Replaces every `{dateTimeNow:FORMAT}` occurrence with `now` rendered
/// through the strftime `FORMAT`.
///
/// An invalid format leaves the placeholder verbatim and emits a warning.
pub fn replace_date_time_at<Tz>(text: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date_time_pattern()
        .replace_all(text, |caps: &regex::Captures| {
            let format = &caps[1];
            let mut rendered = String::new();
            match write!(rendered, "{}", now.format(format)) {
                Ok(()) => rendered,
                Err(_) => {
                    warn!("Invalid date format '{}'", format);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Replaces every `{dateTimeNow:FORMAT}` occurrence with the current local
/// timestamp. All placeholders of one call share the same instant.
pub fn replace_date_time(text: &str) -> String {
    replace_date_time_at(text, &Local::now())
}
