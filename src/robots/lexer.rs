//! Line scanning and field splitting shared by the robots parser.
//!
//! Kept separate from the grouping/matching logic so the lexical rules can be
//! tested in isolation from the agent-selection algorithm that sits on top.

/// Splits a byte slice into logical lines, honoring `\n`, `\r`, and `\r\n` line
/// endings equivalently and without allocating per line.
pub struct Lines<'a> {
    remaining: &'a [u8],
}

impl<'a> Lines<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { remaining: input }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let mut end = self.remaining.len();
        let mut next_start = self.remaining.len();
        for (i, &b) in self.remaining.iter().enumerate() {
            if b == b'\n' {
                end = i;
                next_start = i + 1;
                break;
            }
            if b == b'\r' {
                end = i;
                next_start = if self.remaining.get(i + 1) == Some(&b'\n') {
                    i + 2
                } else {
                    i + 1
                };
                break;
            }
        }

        let line = &self.remaining[..end];
        self.remaining = &self.remaining[next_start..];
        Some(line)
    }
}

/// Trims ASCII whitespace (space, tab, CR, LF) from both ends of `bytes`.
pub fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let is_ws = |b: &u8| matches!(b, b' ' | b'\t' | b'\r' | b'\n');
    let start = bytes.iter().position(|b| !is_ws(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_ws(b)).map_or(start, |p| p + 1);
    &bytes[start..end]
}

/// Strips a `#` comment. A `#` always ends the logical content of a line,
/// whether it appears before any field separator or inside a value (§4.2:
/// "honored inside the value; it terminates the value").
fn strip_comment(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b'#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// ASCII case-insensitive byte comparison.
pub fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// A parsed `field: value` record, with both sides comment-stripped and
/// ASCII-trimmed. Returns `None` for lines with no `:`, which are neither
/// comments-only nor directives and are simply dropped (§7: malformed lines
/// are silently skipped).
pub fn split_field_value(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let line = strip_comment(line);
    let line = trim_ascii(line);
    if line.is_empty() {
        return None;
    }
    let colon = line.iter().position(|&b| b == b':')?;
    let field = trim_ascii(&line[..colon]);
    let value = trim_ascii(&line[colon + 1..]);
    if field.is_empty() {
        return None;
    }
    Some((field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_each_line_ending_kind() {
        let lines: Vec<&[u8]> = Lines::new(b"a\nb\r\nc\rd").collect();
        assert_eq!(lines, vec![b"a".as_slice(), b"b", b"c", b"d"]);
    }

    #[test]
    fn trailing_and_empty_lines() {
        let lines: Vec<&[u8]> = Lines::new(b"a\n\nb\n").collect();
        assert_eq!(lines, vec![b"a".as_slice(), b"", b"b"]);
    }

    #[test]
    fn comment_strips_regardless_of_leading_whitespace() {
        assert_eq!(strip_comment(b"foo#bar"), b"foo");
        assert_eq!(strip_comment(b"  #bar"), b"  ");
        assert_eq!(strip_comment(b"foo"), b"foo");
    }

    #[test]
    fn field_value_trims_and_lowercase_compares() {
        let (field, value) = split_field_value(b"  User-Agent :  TestBot  ").unwrap();
        assert!(eq_ignore_ascii_case(field, b"user-agent"));
        assert_eq!(value, b"TestBot");
    }

    #[test]
    fn no_colon_is_dropped() {
        assert!(split_field_value(b"not a directive").is_none());
    }

    #[test]
    fn comment_inside_value_terminates_it() {
        let (_, value) = split_field_value(b"crawl-delay: 60#cmt").unwrap();
        assert_eq!(value, b"60");
    }
}
