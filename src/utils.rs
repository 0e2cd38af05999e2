use convert_case::{Case, Casing};
use quick_xml::escape::escape;

/// Convert a property name to camelCase (`FirstName` -> `firstName`)
pub fn to_camel_case(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Flatten documentation text onto one line.
///
/// Every whitespace run that contains a line break becomes a single space;
/// other whitespace is left alone. The result is trimmed.
pub fn collapse_line_breaks(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut run = String::new();

    for c in s.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_whitespace(&mut result, &mut run);
        result.push(c);
    }
    flush_whitespace(&mut result, &mut run);

    result.trim().to_string()
}

fn flush_whitespace(result: &mut String, run: &mut String) {
    if run.contains(&['\r', '\n'][..]) {
        result.push(' ');
    } else {
        result.push_str(run);
    }
    run.clear();
}

/// Escape text for embedding in an XML element body or attribute
pub fn escape_xml(s: &str) -> String {
    escape(s).into_owned()
}
