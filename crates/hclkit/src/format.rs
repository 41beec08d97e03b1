//! Canonical re-indentation for raw block text.
//!
//! The renderer emits structurally valid text whose indentation is not
//! guaranteed to be canonical. This pass recomputes every line's indentation
//! from bracket depth. It is pure and never fails on structurally valid
//! input; unbalanced closers simply clamp at depth zero.

const INDENT: &str = "  ";

/// Re-indent raw block text into canonical 2-space form.
///
/// Depth moves at most one level per line, so compound openers like `[{`
/// indent their contents a single level and the matching `}]` closes it.
/// Only indentation is normalized; line contents are untouched. The result
/// carries no trailing newline, matching the renderer's output contract.
pub fn format(raw: &str) -> String {
    let mut depth: i64 = 0;
    let mut lines = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }

        let balance = scan_line(trimmed);
        let this_depth = if balance.starts_with_closer {
            (depth - 1).max(0)
        } else {
            depth
        };

        let mut out = String::with_capacity(trimmed.len() + 2 * this_depth as usize);
        for _ in 0..this_depth {
            out.push_str(INDENT);
        }
        out.push_str(trimmed);
        lines.push(out);

        let net = i64::from(balance.opens) - i64::from(balance.closes);
        depth = (depth + net.clamp(-1, 1)).max(0);
    }

    lines.join("\n")
}

struct Balance {
    opens: u32,
    closes: u32,
    starts_with_closer: bool,
}

/// Count bracket balance on one line, ignoring brackets inside string
/// literals and after a comment marker.
fn scan_line(line: &str) -> Balance {
    let mut opens = 0;
    let mut closes = 0;
    let mut starts_with_closer = false;
    let mut first = true;
    let mut in_string = false;
    let mut escaped = false;

    for c in line.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                first = false;
            }
            '#' => break,
            '{' | '[' | '(' => {
                opens += 1;
                first = false;
            }
            '}' | ']' | ')' => {
                if first {
                    starts_with_closer = true;
                    first = false;
                }
                closes += 1;
            }
            c if c.is_whitespace() => {}
            _ => first = false,
        }
    }

    Balance {
        opens,
        closes,
        starts_with_closer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindents_flat_text() {
        let raw = "resource \"x\" \"y\" {\nami = \"\"\ntags {\nname = \"a\"\n}\n}";
        let expected =
            "resource \"x\" \"y\" {\n  ami = \"\"\n  tags {\n    name = \"a\"\n  }\n}";
        assert_eq!(format(raw), expected);
    }

    #[test]
    fn test_idempotent() {
        let canonical = "block {\n  attr = [\n    \"a\",\n  ]\n}";
        assert_eq!(format(canonical), canonical);
        assert_eq!(format(&format(canonical)), canonical);
    }

    #[test]
    fn test_ignores_braces_in_strings() {
        let raw = "block {\nname = \"{not a brace}\"\n}";
        assert_eq!(format(raw), "block {\n  name = \"{not a brace}\"\n}");
    }

    #[test]
    fn test_ignores_braces_in_comments() {
        let raw = "block {\nattr = 1 # comment with {\n}";
        assert_eq!(format(raw), "block {\n  attr = 1 # comment with {\n}");
    }

    #[test]
    fn test_single_line_block_keeps_depth() {
        let raw = "outer {\ninner { (sensitive) }\nattr = true\n}";
        assert_eq!(
            format(raw),
            "outer {\n  inner { (sensitive) }\n  attr = true\n}"
        );
    }

    #[test]
    fn test_compound_openers_indent_one_level() {
        let raw = "attr = [{\nname = \"a\"\n}]";
        assert_eq!(format(raw), "attr = [{\n  name = \"a\"\n}]");
    }

    #[test]
    fn test_unbalanced_input_clamps() {
        // Structurally broken input still formats without panicking
        assert_eq!(format("}\n}"), "}\n}");
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(format("a = 1\n"), "a = 1");
    }
}
