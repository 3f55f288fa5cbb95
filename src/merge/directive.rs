//! Triple-slash library directive parsing
//!
//! Recognizes lines of the form:
//! /// <reference lib="es2015.core" />

use once_cell::sync::Lazy;
use regex::Regex;

/// Static regex for `/// <reference lib="..." .../>`
/// The name is captured in group 1 (double quotes) or group 2 (single quotes).
pub static REFERENCE_LIB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*///\s*<reference\s+lib\s*=\s*(?:"([^"]*)"|'([^']*)').*?/>"#)
        .expect("Invalid REFERENCE_LIB_RE regex")
});

/// Return the library name referenced by `line`, if it is a lib directive
///
/// A directive with an empty name is not a directive.
pub fn parse_reference_lib(line: &str) -> Option<&str> {
    let caps = REFERENCE_LIB_RE.captures(line)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
}
