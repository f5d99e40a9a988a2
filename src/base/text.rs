//! Text helpers shared by the legacy format parsers.

use std::path::Path;

/// Line-at-a-time reader over an in-memory document.
///
/// A line ends at `\r\n`, `\n` or a lone `\r`. Reaching the end of the
/// buffer ends the stream; an empty line between two terminators is still a
/// line.
#[derive(Clone, Debug)]
pub struct LineReader<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            line: 0,
        }
    }

    /// 1-based number of the most recently returned line.
    pub fn line_number(&self) -> usize {
        self.line
    }

    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        self.line += 1;
        match self.rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &self.rest[..end];
                let after = &self.rest[end..];
                self.rest = after
                    .strip_prefix("\r\n")
                    .or_else(|| after.strip_prefix('\r'))
                    .or_else(|| after.strip_prefix('\n'))
                    .unwrap_or(after);
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

/// Integer prefix of `s`, read the way C `atoi` does: leading whitespace and
/// an optional sign, then digits up to the first non-digit. `0` when there
/// are no digits.
pub fn leading_i64(s: &str) -> i64 {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    s[..sign_len + digits].parse().unwrap_or(0)
}

/// Floating point prefix of `s`, read the way C `atof` does.
pub fn leading_f64(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(s.starts_with(['+', '-']));
    let mut seen_digit = false;
    let mut seen_dot = false;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }

    // Optional exponent, only taken when it has digits.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Rewrite escaped Windows separators (`\\`) as `/`.
pub fn collapse_escaped_slashes(s: &str) -> String {
    s.replace("\\\\", "/")
}

/// Rewrite every `\` as `/`.
pub fn forward_slashes(s: &str) -> String {
    s.replace('\\', "/")
}

/// Decode the XML entities that legacy files embed in attribute values.
pub fn unescape_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// File name without directory and extension.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
