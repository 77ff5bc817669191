//! Conditional `#IF(content, LABEL)` directive resolution.
//!
//! Directives are recognized by a dedicated scanner rather than a generic
//! pattern matcher so nested and malformed input behaves predictably: a
//! malformed directive (unterminated parenthesis, missing comma) never
//! matches and is left untouched, and a directive whose content would itself
//! contain `#IF` is skipped in favor of the inner occurrence.

use crate::config::IfStatementItem;

const DIRECTIVE_PREFIX: &str = "#IF(";

/// A well-formed directive occurrence inside a template body.
#[derive(Debug, PartialEq)]
struct Directive<'a> {
    /// Byte offset of `#IF(`
    start: usize,
    /// Byte offset one past the closing parenthesis
    end: usize,
    content: &'a str,
    label: &'a str,
}

/// Finds the next well-formed directive at or after `from`.
fn find_directive(text: &str, from: usize) -> Option<Directive<'_>> {
    let mut search_from = from;
    while let Some(rel) = text[search_from..].find(DIRECTIVE_PREFIX) {
        let start = search_from + rel;
        if let Some(directive) = parse_directive_at(text, start) {
            return Some(directive);
        }
        search_from = start + DIRECTIVE_PREFIX.len();
    }
    None
}

/// Attempts to parse a directive whose `#IF(` prefix starts at `start`.
///
/// The content is the span up to the first workable comma; the label runs
/// from that comma to the first following `)`. A comma is workable when
/// content is non-empty and a non-empty label span follows it.
fn parse_directive_at(text: &str, start: usize) -> Option<Directive<'_>> {
    let body_start = start + DIRECTIVE_PREFIX.len();
    let body = &text[body_start..];

    let mut comma_from = 0;
    loop {
        let comma = comma_from + body[comma_from..].find(',')?;
        let content = &body[..comma];

        if content.contains("#IF") {
            // the inner occurrence wins; this one is not a directive
            return None;
        }
        if content.is_empty() {
            comma_from = comma + 1;
            continue;
        }

        let close = match body[comma + 1..].find(')') {
            Some(rel) => comma + 1 + rel,
            None => return None,
        };
        if close == comma + 1 {
            // empty label span; the comma belongs to the content
            comma_from = comma + 1;
            continue;
        }

        return Some(Directive {
            start,
            end: body_start + close + 1,
            content,
            label: &body[comma + 1..close],
        });
    }
}

/// Replaces every directive whose label equals `matching_option` with its
/// trimmed content. Non-matching directives are left untouched.
pub fn replace_by_if_statement(matching_option: &str, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(directive) = find_directive(input, pos) {
        out.push_str(&input[pos..directive.start]);
        if directive.label.trim() == matching_option {
            out.push_str(directive.content.trim());
        } else {
            out.push_str(&input[directive.start..directive.end]);
        }
        pos = directive.end;
    }
    out.push_str(&input[pos..]);
    out
}

/// Removes every remaining directive and cleans up the surrounding
/// whitespace: a line left blank by a removal is dropped, a directive flanked
/// by spaces on both sides collapses them into one, and the whole text is
/// trimmed.
pub fn remove_all_if_statements(input: &str) -> String {
    let mut text = input.to_string();
    while let Some(directive) = find_directive(&text, 0) {
        text = remove_directive(&text, directive.start, directive.end);
    }
    text.trim().to_string()
}

fn remove_directive(text: &str, start: usize, end: usize) -> String {
    let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[end..].find('\n').map(|i| end + i).unwrap_or(text.len());

    let before = &text[line_start..start];
    let after = &text[end..line_end];

    // the removal leaves the line blank: drop the whole line
    if before.trim().is_empty() && after.trim().is_empty() {
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..line_start]);
        if line_end < text.len() {
            out.push_str(&text[line_end + 1..]);
        }
        return out;
    }

    let left_run = before.len() - before.trim_end_matches([' ', '\t']).len();
    let right_run = after.len() - after.trim_start_matches([' ', '\t']).len();

    let mut out = String::with_capacity(text.len());
    if left_run > 0 && right_run > 0 {
        // flanked by whitespace on both sides: collapse to a single space
        out.push_str(&text[..start - left_run]);
        out.push(' ');
        out.push_str(&text[end + right_run..]);
    } else {
        out.push_str(&text[..start]);
        out.push_str(&text[end..]);
    }
    out
}

/// Resolves the conditional directives of a template body.
///
/// Items are stable-sorted ascending by `order` and applied in that order;
/// every directive left unmatched afterwards is stripped. With no items at
/// all the input goes straight to stripping.
pub fn replace_if_statements(if_statements: &[IfStatementItem], input: &str) -> String {
    if if_statements.is_empty() {
        return remove_all_if_statements(input);
    }

    let mut sorted: Vec<&IfStatementItem> = if_statements.iter().collect();
    sorted.sort_by_key(|item| item.order);

    let mut text = input.to_string();
    for item in sorted {
        text = replace_by_if_statement(&item.option, &text);
    }

    remove_all_if_statements(&text)
}
