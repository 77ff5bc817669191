//! Case conversion for the `#(text, caseLabel)` placeholder.
//! Labels are matched ignoring letter case and separator characters, so
//! `PASCAL_CASE`, `pascal-case` and `PascalCase` select the same conversion.

use cruet::Inflector;
use log::warn;
use regex::Regex;
use std::sync::OnceLock;

/// Case conventions a placeholder can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseLabel {
    CamelCase,
    SnakeCase,
    PascalCase,
    DotCase,
    PathCase,
    TextCase,
    SentenceCase,
    HeaderCase,
    LowerCase,
    UpperCase,
    KebabCase,
    UpperSnakeCase,
    LowerSnakeCase,
}

impl CaseLabel {
    /// Parses a label, ignoring letter case and separator characters.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "camelcase" => Some(CaseLabel::CamelCase),
            "snakecase" => Some(CaseLabel::SnakeCase),
            "pascalcase" => Some(CaseLabel::PascalCase),
            "dotcase" => Some(CaseLabel::DotCase),
            "pathcase" => Some(CaseLabel::PathCase),
            "textcase" => Some(CaseLabel::TextCase),
            "sentencecase" => Some(CaseLabel::SentenceCase),
            "headercase" => Some(CaseLabel::HeaderCase),
            "lowercase" => Some(CaseLabel::LowerCase),
            "uppercase" => Some(CaseLabel::UpperCase),
            "kebabcase" => Some(CaseLabel::KebabCase),
            "uppersnakecase" => Some(CaseLabel::UpperSnakeCase),
            "lowersnakecase" => Some(CaseLabel::LowerSnakeCase),
            _ => None,
        }
    }
}

/// Converts `text` into the convention named by `label`.
///
/// Unrecognized labels return the text unchanged.
pub fn convert_case(text: &str, label: &str) -> String {
    let Some(case) = CaseLabel::parse(label) else {
        warn!("Unrecognized case label '{}'", label);
        return text.to_string();
    };

    match case {
        CaseLabel::CamelCase => text.to_camel_case(),
        CaseLabel::SnakeCase | CaseLabel::LowerSnakeCase => text.to_snake_case(),
        CaseLabel::PascalCase => text.to_pascal_case(),
        CaseLabel::DotCase => text.to_snake_case().replace('_', "."),
        CaseLabel::PathCase => text.to_snake_case().replace('_', "/"),
        CaseLabel::TextCase => text.to_snake_case().replace('_', " "),
        CaseLabel::SentenceCase => text.to_sentence_case(),
        CaseLabel::HeaderCase => text.to_title_case(),
        CaseLabel::LowerCase => text.to_lowercase(),
        CaseLabel::UpperCase => text.to_uppercase(),
        CaseLabel::KebabCase => text.to_kebab_case(),
        CaseLabel::UpperSnakeCase => text.to_screaming_snake_case(),
    }
}

fn case_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#\(([^,]+),\s*([^)]+)\)").unwrap())
}

/// Replaces every `#(text, caseLabel)` occurrence with the converted text.
pub fn convert_cases(text: &str) -> String {
    case_pattern()
        .replace_all(text, |caps: &regex::Captures| {
            convert_case(&caps[1], caps[2].trim())
        })
        .into_owned()
}
