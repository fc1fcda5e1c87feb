/// Decodes the quoted source text of a string literal.
///
/// The surrounding quotes are removed and the escape sequences `\n`, `\t`,
/// `\r`, `\"` and `\\` are replaced by the characters they denote. Any other
/// backslash sequence is kept as written. Decoding is a single left-to-right
/// pass, so `\\n` yields a backslash followed by `n`.
///
/// # Parameters
/// - `raw`: The literal exactly as it appears in source, including quotes.
///
/// # Example
/// ```
/// use solar::interpreter::value::escape::decode_string_literal;
///
/// assert_eq!(decode_string_literal(r#""a\nb\t\"c\\d""#), "a\nb\t\"c\\d");
/// assert_eq!(decode_string_literal(r#""\q""#), "\\q");
/// ```
#[must_use]
pub fn decode_string_literal(raw: &str) -> String {
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('"') => decoded.push('"'),
            Some('\\') => decoded.push('\\'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            },
            None => decoded.push('\\'),
        }
    }

    decoded
}
