const PUNCTUATION: &[u8] = b".,!?;:\"'()[]{}<>";

/// Splits `text` on ascii whitespace. Multi-byte whitespace is not a separator.
pub fn tokenize<'a>(text: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
    text.split(
        |b| matches!(*b, b' ' | b'\t' | b'\n' | b'\r')
    ).filter(
        |token| !token.is_empty()
    )
}

/// Removes leading and trailing punctuation. Punctuation inside the token stays.
///
/// The punctuation characters are all ascii, and ascii bytes never appear inside a
/// multi-byte utf-8 sequence, so the result never cuts a character in half.
pub fn trim_punct(token: &[u8]) -> &[u8] {
    let start = token.iter().position(|b| !PUNCTUATION.contains(b)).unwrap_or(token.len());
    let end = token.iter().rposition(|b| !PUNCTUATION.contains(b)).map(|i| i + 1).unwrap_or(start);

    &token[start..end]
}
