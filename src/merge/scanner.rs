//! Comment stripping scanner
//!
//! Purely lexical: `//` and `/* */` are recognized anywhere on a line,
//! including inside string or regex literals. A line such as
//! `declare const url: "http://x";` loses everything after `//`.

/// Outcome of scanning one physical line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanOutcome {
    /// The line with comments removed (preserved comment text included)
    pub line: String,

    /// Whether a block comment is still open at the end of the line
    pub in_block_comment: bool,

    /// The line held a comment and nothing else survived; drop it entirely
    pub wholly_commented: bool,

    /// The preserved block comment was closed on this line
    pub captured_first_block_comment: bool,
}

/// Strip comments from a single line
///
/// `in_block_comment` is the state left by the previous line of the same
/// file. When `keep_first_block_comment` is set, the first block comment
/// opened on (or carried into) this line is copied through verbatim instead
/// of being removed; the caller clears the flag once
/// [`ScanOutcome::captured_first_block_comment`] is reported.
///
/// Lookback is a single character and does not span lines, so a `*` ending
/// one line and a `/` starting the next do not close a comment.
pub fn scan_line(line: &str, in_block_comment: bool, keep_first_block_comment: bool) -> ScanOutcome {
    let mut out = String::with_capacity(line.len());
    let mut prev: Option<char> = None;
    let mut in_block = in_block_comment;
    let mut found_comment = in_block_comment;
    let mut captured = false;
    let mut keeping = in_block_comment && keep_first_block_comment;
    let mut preserved_any = keeping;

    for c in line.chars() {
        if in_block {
            if prev == Some('*') && c == '/' {
                in_block = false;
                if keeping {
                    captured = true;
                    out.push_str("*/");
                }
                keeping = false;
                prev = None;
                continue;
            } else if !keeping {
                prev = Some(c);
                continue;
            }
        } else if prev == Some('/') {
            if c == '/' {
                // rest of the line is a line comment
                prev = None;
                found_comment = true;
                break;
            } else if c == '*' {
                in_block = true;
                prev = None;
                found_comment = true;
                if keep_first_block_comment && !captured {
                    keeping = true;
                    preserved_any = true;
                    out.push_str("/*");
                }
                continue;
            }
        }

        if let Some(p) = prev {
            out.push(p);
        }
        prev = Some(c);
    }

    if !in_block || keeping {
        if let Some(p) = prev {
            out.push(p);
        }
    }

    ScanOutcome {
        wholly_commented: found_comment && out.is_empty() && !preserved_any,
        line: out,
        in_block_comment: in_block,
        captured_first_block_comment: captured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(line: &str) -> ScanOutcome {
        scan_line(line, false, false)
    }

    #[test]
    fn test_plain_line_unchanged() {
        let outcome = strip("declare var NaN: number;");
        assert_eq!(outcome.line, "declare var NaN: number;");
        assert!(!outcome.in_block_comment);
        assert!(!outcome.wholly_commented);
    }

    #[test]
    fn test_trailing_line_comment_keeps_code_and_space() {
        let outcome = strip("a(); // c");
        assert_eq!(outcome.line, "a(); ");
        assert!(!outcome.wholly_commented);
    }

    #[test]
    fn test_whole_line_comment_is_dropped() {
        let outcome = strip("    // nothing here");
        assert_eq!(outcome.line, "    ");
        assert!(!outcome.wholly_commented);

        let outcome = strip("// nothing here");
        assert_eq!(outcome.line, "");
        assert!(outcome.wholly_commented);
    }

    #[test]
    fn test_empty_line_is_not_a_comment() {
        let outcome = strip("");
        assert_eq!(outcome.line, "");
        assert!(!outcome.wholly_commented);
    }

    #[test]
    fn test_inline_block_comment_removed() {
        let outcome = strip("/* x */ y");
        assert_eq!(outcome.line, " y");
        assert!(!outcome.in_block_comment);

        let outcome = strip("f(a /* first */, b);");
        assert_eq!(outcome.line, "f(a , b);");
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let first = strip("interface A { /* open");
        assert_eq!(first.line, "interface A { ");
        assert!(first.in_block_comment);
        assert!(!first.wholly_commented);

        let middle = scan_line("  * still inside", true, false);
        assert_eq!(middle.line, "");
        assert!(middle.in_block_comment);
        assert!(middle.wholly_commented);

        let last = scan_line("  done */ }", true, false);
        assert_eq!(last.line, " }");
        assert!(!last.in_block_comment);
    }

    #[test]
    fn test_close_does_not_span_lines() {
        let first = strip("/* a *");
        assert!(first.in_block_comment);
        let second = scan_line("/ b", true, false);
        assert!(second.in_block_comment);
    }

    #[test]
    fn test_slash_star_slash_does_not_close() {
        let outcome = strip("x /*/ y");
        assert_eq!(outcome.line, "x ");
        assert!(outcome.in_block_comment);
    }

    #[test]
    fn test_block_comment_then_line_comment() {
        let outcome = strip("a /* b */ c // d");
        assert_eq!(outcome.line, "a  c ");
    }

    #[test]
    fn test_literals_are_not_special() {
        let outcome = strip(r#"declare const url: "http://example.com";"#);
        assert_eq!(outcome.line, r#"declare const url: "http:"#);
    }

    #[test]
    fn test_keep_single_line_first_block_comment() {
        let outcome = scan_line("/** lic */", false, true);
        assert_eq!(outcome.line, "/** lic */");
        assert!(outcome.captured_first_block_comment);
        assert!(!outcome.in_block_comment);
        assert!(!outcome.wholly_commented);
    }

    #[test]
    fn test_keep_multi_line_first_block_comment() {
        let first = scan_line("/*!", false, true);
        assert_eq!(first.line, "/*!");
        assert!(first.in_block_comment);
        assert!(!first.captured_first_block_comment);

        let blank = scan_line("", true, true);
        assert_eq!(blank.line, "");
        assert!(!blank.wholly_commented);

        let body = scan_line(" * Licensed under MIT", true, true);
        assert_eq!(body.line, " * Licensed under MIT");
        assert!(!body.wholly_commented);

        let last = scan_line(" */", true, true);
        assert_eq!(last.line, " */");
        assert!(last.captured_first_block_comment);
        assert!(!last.in_block_comment);
    }

    #[test]
    fn test_keep_only_first_block_on_line() {
        let outcome = scan_line("/* a */ x /* b */", false, true);
        assert_eq!(outcome.line, "/* a */ x ");
        assert!(outcome.captured_first_block_comment);
    }

    #[test]
    fn test_keep_still_strips_line_comments() {
        let outcome = scan_line("// header", false, true);
        assert_eq!(outcome.line, "");
        assert!(outcome.wholly_commented);
        assert!(!outcome.captured_first_block_comment);
    }

    #[test]
    fn test_keep_code_before_comment() {
        let outcome = scan_line("code(); /* kept */", false, true);
        assert_eq!(outcome.line, "code(); /* kept */");
    }

    #[test]
    fn test_non_ascii_text() {
        let outcome = strip("let s = 'héllo'; // ünïcode");
        assert_eq!(outcome.line, "let s = 'héllo'; ");
    }
}
