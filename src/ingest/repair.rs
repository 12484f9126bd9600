use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The source files lost their one-half glyph; the word after the
    /// replacement character tells us how it was used.
    static ref HALF_GLYPH_FIXES: Vec<(Regex, &'static str)> = [
        ("cup", "½ cup"),
        ("bagel", "½ bagel"),
        ("pita", "½ pita"),
        ("piece", "½ piece"),
        ("muffin", "½ muffin"),
        ("naan", "½ naan"),
        ("fruit", "½ fruit"),
        ("medium", "½ medium"),
        ("pod", "½ pod"),
        ("leek", "½ leek"),
        ("slice", "½ slice"),
        ("ear", "½ ear"),
        ("oz", "½ oz"),
    ]
    .iter()
    .map(|(word, fixed)| {
        let re = Regex::new(&format!(r"(?i)\x{{FFFD}}\s*{word}")).unwrap();
        (re, *fixed)
    })
    .collect();
    static ref BARE_REPLACEMENT_CHAR: Regex = Regex::new(r"\x{FFFD}").unwrap();
}

/// Repairs U+FFFD left in a loaded text field.
pub fn fix_encoding(text: &str) -> String {
    if !text.contains('\u{FFFD}') {
        return text.to_string();
    }
    let mut fixed = text.to_string();
    for (re, replacement) in HALF_GLYPH_FIXES.iter() {
        fixed = re.replace_all(&fixed, *replacement).into_owned();
    }
    BARE_REPLACEMENT_CHAR.replace_all(&fixed, "½").into_owned()
}
