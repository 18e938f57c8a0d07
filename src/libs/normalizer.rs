use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form of a piece of text: lowercase, accents and
/// compatibility forms reduced to their base letters, trimmed.
/// Internal whitespace and punctuation are kept as they are.
pub fn normalize(s: &str) -> String {
    let folded = s.to_lowercase().chars().fold(String::with_capacity(s.len()), |mut out, c| {
        match fold_letter(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
        out
    });

    // Compatibility decomposition can surface capitals (fullwidth, letterlike symbols).
    let stripped: String = folded.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    stripped.to_lowercase().trim().to_string()
}

/// Same as [`normalize`], an absent value becomes the empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}

// Letters that carry their accent in the code point itself and have no
// canonical decomposition.
fn fold_letter(c: char) -> Option<&'static str> {
    let ascii = match c {
        'đ' | 'ð' => "d",
        'ø' => "o",
        'ł' => "l",
        'ı' => "i",
        'ħ' => "h",
        'ŧ' => "t",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'ŋ' => "ng",
        'ŀ' => "l",
        'ƀ' => "b",
        'þ' => "th",
        _ => return None,
    };
    Some(ascii)
}
