//! Descriptor parser - turns free-form type descriptors into `TypeDescriptor`
//!
//! Descriptors come from a live host type system and follow loose conventions
//! only, so parsing never fails: every shape ends up in some variant, with
//! `TypeDescriptor::Opaque` as the terminus for anything unrecognized.

use crate::known_types::{classify, is_collection_type};
use crate::models::{TypeArg, TypeDescriptor};

/// Identifier used when a descriptor yields no letters at all
pub const FALLBACK_IDENTIFIER: &str = "any";

/// A `Name<Arg>` match anchored at the end of the descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GenericMatch<'a> {
    /// Byte offset where `name` starts
    start: usize,
    name: &'a str,
    arg: &'a str,
}

/// Parse a descriptor, first matching shape wins.
///
/// Nullable markers are dropped up front. Any descriptor containing `[]`
/// is an array; its element is the letter run before a trailing `[]`, kept
/// verbatim, or `FALLBACK_IDENTIFIER` when there is none. Generic arguments
/// are classified but never parsed further.
pub fn parse_descriptor(descriptor: &str) -> TypeDescriptor {
    let text: String = descriptor.chars().filter(|&c| c != '?').collect();
    let text = text.as_str();

    if let Some(canonical) = classify(text) {
        return TypeDescriptor::Primitive(canonical);
    }

    if is_collection_type(text) {
        if let Some(m) = match_collection(text) {
            return TypeDescriptor::Collection {
                name: m.name.to_string(),
                arg: parse_type_arg(m.arg),
            };
        }
    }

    if text.contains("[]") {
        let element = match_bracket_array(text).unwrap_or(FALLBACK_IDENTIFIER);
        return TypeDescriptor::Array(element.to_string());
    }

    if let Some(m) = match_generic(text) {
        return TypeDescriptor::GenericClass {
            name: m.name.to_string(),
            arg: parse_type_arg(m.arg),
            matched: text[m.start..].to_string(),
        };
    }

    TypeDescriptor::Opaque(fallback_identifier(text).to_string())
}

/// Classify a generic argument, keeping it raw when it is not a scalar
pub fn parse_type_arg(arg: &str) -> TypeArg {
    match classify(arg) {
        Some(canonical) => TypeArg::Primitive(canonical),
        None => TypeArg::Raw(arg.to_string()),
    }
}

/// Extract the generic suffix of a qualified name (`Ns.Page<int>` -> `int`).
///
/// The argument runs from the first `<` to a `>` that ends the string and
/// may be empty.
pub fn parse_generic_suffix(full_name: &str) -> Option<&str> {
    let body = full_name.strip_suffix('>')?;
    let open = body.find('<')?;
    Some(&body[open + 1..])
}

/// Match `.Name<Arg>` at the end, taking the left-most qualifying `.`
fn match_collection(text: &str) -> Option<GenericMatch<'_>> {
    match_generic_where(text, |prefix| prefix.ends_with('.'))
}

/// Match `Name<Arg>` at the end, taking the left-most qualifying `Name`
fn match_generic(text: &str) -> Option<GenericMatch<'_>> {
    match_generic_where(text, |_| true)
}

/// Shared scan for both generic shapes.
///
/// `Name` is the full letter run directly before a `<`, `Arg` is everything
/// between that `<` and the final `>` and must not be empty. `accept` sees the
/// text preceding `Name`.
fn match_generic_where<'a>(
    text: &'a str,
    accept: impl Fn(&str) -> bool,
) -> Option<GenericMatch<'a>> {
    let body = text.strip_suffix('>')?;

    for (open, _) in body.match_indices('<') {
        let name = trailing_letters(&body[..open]);
        let arg = &body[open + 1..];
        if name.is_empty() || arg.is_empty() {
            continue;
        }

        let start = open - name.len();
        if accept(&body[..start]) {
            return Some(GenericMatch { start, name, arg });
        }
    }

    None
}

/// Match `Element[]` at the end, `Element` being a letter run
fn match_bracket_array(text: &str) -> Option<&str> {
    let body = text.strip_suffix("[]")?;
    let element = trailing_letters(body);
    (!element.is_empty()).then_some(element)
}

/// Bare identifier for an unrecognized descriptor.
///
/// Prefers the letter run ending the descriptor, then the leading letter run
/// of the last dot segment, then `FALLBACK_IDENTIFIER`.
fn fallback_identifier(text: &str) -> &str {
    let trailing = trailing_letters(text);
    if !trailing.is_empty() {
        return trailing;
    }

    let segment = text.rsplit('.').next().unwrap_or(text);
    let leading = leading_letters(segment);
    if !leading.is_empty() {
        return leading;
    }

    FALLBACK_IDENTIFIER
}

fn trailing_letters(s: &str) -> &str {
    let count = s.bytes().rev().take_while(u8::is_ascii_alphabetic).count();
    &s[s.len() - count..]
}

fn leading_letters(s: &str) -> &str {
    let count = s.bytes().take_while(u8::is_ascii_alphabetic).count();
    &s[..count]
}
