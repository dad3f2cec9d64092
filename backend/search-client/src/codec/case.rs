//! Pure casing transforms shared by the two codecs.

/// Lowercase `text`, inserting `separator` at every lower-to-upper
/// transition and at every letter/digit transition.
///
/// `"ProfileAndCV"` with `'-'` becomes `"profile-and-cv"`;
/// `"ExpiresIn"` with `'_'` becomes `"expires_in"`;
/// `"Over200K"` with `'-'` becomes `"over-200-k"`.
pub fn lower_delimited(text: &str, separator: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    for (index, &current) in chars.iter().enumerate() {
        out.extend(current.to_lowercase());

        let Some(&next) = chars.get(index + 1) else {
            continue;
        };

        if current.is_numeric() != next.is_numeric() {
            out.push(separator);
        } else if next.is_uppercase() && current.is_lowercase() {
            out.push(separator);
        }
    }
    out
}

/// Rebuild capitalised-word form from lowercase `separator`-delimited
/// text. A digit run also terminates a word, so `"over-200-k"` becomes
/// `"Over200K"`.
pub fn pascal_from_delimited(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut new_word = true;
    for current in text.chars() {
        if current == separator {
            new_word = true;
        } else if current.is_numeric() {
            new_word = true;
            out.push(current);
        } else if new_word {
            out.extend(current.to_uppercase());
            new_word = false;
        } else {
            out.extend(current.to_lowercase());
        }
    }
    out
}
