//! String transforms applied while composing names.

/// Long weight prefixes and the short forms used in space-constrained names.
const ABBREVIATIONS: [(&str, &str); 4] = [
    ("ExtraLight", "XLight"),
    ("ExtraBold", "XBold"),
    ("UltraLight", "ULight"),
    ("UltraBold", "UBold"),
];

/// Characters that may not appear in a PostScript name, besides anything
/// outside printable ASCII.
const POSTSCRIPT_FORBIDDEN: [char; 10] = ['[', ']', '(', ')', '{', '}', '<', '>', '/', '%'];

const POSTSCRIPT_MAX_LEN: usize = 63;

/// Remove spaces and abbreviate the long weight words.
///
/// ```
/// assert_eq!(nimeta::text::shrink("ExtraBold Italic"), "XBoldItalic");
/// ```
pub fn shrink(text: &str) -> String {
    ABBREVIATIONS
        .iter()
        .fold(text.replace(' ', ""), |acc, (long, short)| {
            acc.replace(long, short)
        })
}

/// Remove the word "Regular" from a (sub)family name.
pub fn remove_regular(text: &str) -> String {
    collapse_spaces(&text.replace("Regular", ""))
        .trim()
        .to_string()
}

/// Replace each pair of adjacent spaces with a single space.
///
/// This is a single pass: a run of three spaces becomes two.
pub(crate) fn collapse_spaces(text: &str) -> String {
    text.replace("  ", " ")
}

/// Restrict a name to the characters allowed in a PostScript name.
///
/// See the description of name ID 6 at
/// <https://learn.microsoft.com/en-us/typography/opentype/spec/name#name-ids>
pub fn postscript_safe(text: &str) -> String {
    text.chars()
        .filter(|&c| matches!(c, '!'..='~') && !POSTSCRIPT_FORBIDDEN.contains(&c))
        .take(POSTSCRIPT_MAX_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bold", "Bold")]
    #[case("ExtraBold", "XBold")]
    #[case("ExtraLight Italic", "XLightItalic")]
    #[case("UltraLight Condensed", "ULightCondensed")]
    #[case("Ultra Bold", "UBold")]
    #[case("Semi Bold Extra Expanded", "SemiBoldExtraExpanded")]
    #[case("", "")]
    fn shrink_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(shrink(input), expected);
    }

    #[rstest]
    #[case("Regular", "")]
    #[case("Bold Regular", "Bold")]
    #[case("Sans Regular Italic", "Sans Italic")]
    #[case("  Regular  ", "")]
    #[case("Display", "Display")]
    fn remove_regular_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(remove_regular(input), expected);
    }

    #[rstest]
    #[case("ExtraBold Condensed")]
    #[case("Ultra Light")]
    #[case("XBold")]
    #[case("Black Italic")]
    fn shrink_is_idempotent(#[case] input: &str) {
        let once = shrink(input);
        assert_eq!(shrink(&once), once);
    }

    #[rstest]
    #[case("Regular Regular")]
    #[case("Sans  Regular")]
    #[case("RegularRegular Bold")]
    #[case("Caption")]
    fn remove_regular_is_idempotent(#[case] input: &str) {
        let once = remove_regular(input);
        assert_eq!(remove_regular(&once), once);
    }

    #[test]
    fn collapse_is_single_pass() {
        assert_eq!(collapse_spaces("a  b"), "a b");
        assert_eq!(collapse_spaces("a   b"), "a  b");
    }

    #[test]
    fn postscript_names() {
        assert_eq!(postscript_safe("Almarai Sans-Bold"), "AlmaraiSans-Bold");
        assert_eq!(postscript_safe("A(b)[c]{d}<e>/f%g"), "Abcdefg");
        assert_eq!(postscript_safe("Café-Bold"), "Caf-Bold");
        let long = "x".repeat(100);
        assert_eq!(postscript_safe(&long).len(), 63);
    }
}
