/// Whether `c` belongs to a word: ASCII digits, `_` and letters of cased alphabets.
///
/// Letters of uncased scripts such as Thai are written without spaces, so they separate words
/// the same way punctuation does (`หุ้นIBMปรับขึ้น` holds the word `IBM`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_digit() || c == '_' || c.is_uppercase() || c.is_lowercase()
}

/// Splits text into words and keeps those written entirely in ASCII capitals with a length
/// inside `min_length..=max_length`.
///
/// Note: This explicitly does not modify the case of the text.
pub fn tokenize_uppercase_words(text: &str, min_length: usize, max_length: usize) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| word.len() >= min_length && word.len() <= max_length)
        .filter(|word| word.chars().all(|c| c.is_ascii_uppercase()))
        .collect()
}
