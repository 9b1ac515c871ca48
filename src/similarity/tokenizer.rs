use std::collections::BTreeSet;

/// Characters that always separate descriptor tokens.
const SEPARATOR_CHARS: &[char] = &[',', ';', '/', '|', '+', '&', '(', ')', '×'];

/// Whole-word separators, matched against lower-cased, space-padded text.
const SEPARATOR_WORDS: &[&str] = &[" x ", " und ", " and "];

/// Split a free-text descriptor field (lineage, scent, aroma) into tokens.
///
/// Tokens are lower-cased, trimmed and non-empty. Inner whitespace is
/// collapsed so `"Sour   Diesel"` and `"sour diesel"` produce the same token.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    extend_tokens(&mut tokens, text);
    tokens
}

/// Tokenize `text` into an existing set.
pub fn extend_tokens(tokens: &mut BTreeSet<String>, text: &str) {
    let lowered = text.to_lowercase();

    for piece in lowered.split(SEPARATOR_CHARS) {
        let mut padded = String::with_capacity(piece.len() + 2);
        padded.push(' ');
        padded.push_str(&collapse_whitespace(piece));
        padded.push(' ');

        let mut parts = vec![padded];
        for word in SEPARATOR_WORDS {
            parts = parts
                .iter()
                .flat_map(|part| part.split(*word))
                // Re-pad so adjacent separators ("a x b x c") keep matching.
                .map(|part| format!(" {} ", part.trim()))
                .collect();
        }

        for part in parts {
            let token = part.trim();
            if !token.is_empty() {
                tokens.insert(token.to_string());
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
