//! Input tokenizers using nom.
//!
//! Every tool starts from pasted text. Two shapes are recognised:
//!
//! ```text
//! lines:  "a\r\n\n b \n"   => ["a", "b"]
//! words:  "id, name\tage"  => ["id", "name", "age"]
//! ```

use nom::{
    IResult,
    bytes::complete::{take_while, take_while1},
    multi::many0,
    sequence::preceded,
};

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// ECMAScript `WhiteSpace` and `LineTerminator`: includes the BOM (U+FEFF),
/// excludes NEL (U+0085).
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_word_break(c: char) -> bool {
    is_js_whitespace(c) || c == ','
}

/// Parse the runs of non-break characters, skipping any break run before each.
fn pieces(input: &str, is_break: fn(char) -> bool) -> IResult<&str, Vec<&str>> {
    many0(preceded(
        take_while(is_break),
        take_while1(move |c: char| !is_break(c)),
    ))(input)
}

fn collect(input: &str, is_break: fn(char) -> bool) -> Vec<String> {
    match pieces(input, is_break) {
        Ok((_, found)) => found
            .into_iter()
            .map(|p| p.trim_matches(is_js_whitespace))
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Split on runs of CR/LF, trim each piece and drop empty ones.
pub fn split_lines(input: &str) -> Vec<String> {
    collect(input, is_line_break)
}

/// Split on runs of whitespace and/or commas, dropping empty pieces.
pub fn split_words(input: &str) -> Vec<String> {
    collect(input, is_word_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\n\nb\rc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_trims_and_drops_blank() {
        assert_eq!(split_lines("  one  \n   \n\ttwo\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_split_lines_keeps_inner_spaces() {
        assert_eq!(split_lines("New York\nLos Angeles"), vec!["New York", "Los Angeles"]);
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("id, name,,age\n\tcreated_at"), vec!["id", "name", "age", "created_at"]);
    }

    #[test]
    fn test_bom_is_whitespace() {
        assert_eq!(split_lines("\u{feff}1\r\n2"), vec!["1", "2"]);
        assert_eq!(split_words("\u{feff}id a\u{feff}b"), vec!["id", "a", "b"]);
    }

    #[test]
    fn test_nel_is_not_whitespace() {
        assert_eq!(split_words("a\u{85}b"), vec!["a\u{85}b"]);
        assert_eq!(split_lines("\u{85}x\u{85}"), vec!["\u{85}x\u{85}"]);
    }

    #[test]
    fn test_unicode_spaces_trimmed() {
        assert_eq!(split_lines("\u{a0}x\u{3000}\n\u{2003}"), vec!["x"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\r\n\n").is_empty());
        assert!(split_words(" , ,\n").is_empty());
    }

    #[test]
    fn test_split_is_idempotent() {
        let once = split_words("  a ,b  c ");
        assert_eq!(split_words(&once.join(", ")), once);

        let once = split_lines(" x \n\n y ");
        assert_eq!(split_lines(&once.join("\n")), once);
    }
}
