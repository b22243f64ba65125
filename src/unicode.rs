//! Character predicates and case helpers used by the case-fold stage.

/// U+0307 COMBINING DOT ABOVE.
pub const COMBINING_DOT_ABOVE: char = '\u{307}';

/// Combining diacritical marks (the general-purpose blocks).
#[inline(always)]
pub fn is_combining_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F | // Combining Diacritical Marks
        0x0483..=0x0489 | // Cyrillic titlo and friends
        0x1AB0..=0x1AFF | // Extended
        0x1DC0..=0x1DFF | // Supplement
        0x20D0..=0x20FF | // For Symbols
        0xFE20..=0xFE2F   // Half Marks
    )
}

/// Titlecase form of `c`, which differs from its uppercase for the Latin
/// digraph letters.
#[inline]
pub fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{1C4}' | '\u{1C5}' | '\u{1C6}' => Some('\u{1C5}'), // DŽ
        '\u{1C7}' | '\u{1C8}' | '\u{1C9}' => Some('\u{1C8}'), // LJ
        '\u{1CA}' | '\u{1CB}' | '\u{1CC}' => Some('\u{1CB}'), // NJ
        '\u{1F1}' | '\u{1F2}' | '\u{1F3}' => Some('\u{1F2}'), // DZ
        _ => None,
    }
}

/// Append the titlecase of `c`: digraphs take their titlecase letter,
/// multi-letter uppercase expansions keep only the first letter upper
/// (`ß` → `Ss`).
pub fn push_titlecase(out: &mut String, c: char) {
    if let Some(t) = titlecase_digraph(c) {
        out.push(t);
        return;
    }
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    out.extend(upper.flat_map(char::to_lowercase));
}

/// Does `c` change under full uppercase mapping?
#[inline]
pub fn changes_in_upper(c: char) -> bool {
    let mut upper = c.to_uppercase();
    !(upper.len() == 1 && upper.next() == Some(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(c: char) -> String {
        let mut out = String::new();
        push_titlecase(&mut out, c);
        out
    }

    #[test]
    fn digraphs_use_titlecase_letters() {
        assert_eq!(title('\u{1C6}'), "\u{1C5}");
        assert_eq!(title('\u{1C7}'), "\u{1C8}");
        assert_eq!(title('\u{1F3}'), "\u{1F2}");
    }

    #[test]
    fn expansions_keep_one_capital() {
        assert_eq!(title('ß'), "Ss");
        assert_eq!(title('a'), "A");
        assert_eq!(title('ж'), "Ж");
    }

    #[test]
    fn combining_marks() {
        assert!(is_combining_mark(COMBINING_DOT_ABOVE));
        assert!(is_combining_mark('\u{301}'));
        assert!(is_combining_mark('\u{483}'));
        assert!(!is_combining_mark('a'));
        assert!(!is_combining_mark('\u{2019}'));
    }

    #[test]
    fn upper_changes() {
        assert!(changes_in_upper('a'));
        assert!(changes_in_upper('ß'));
        assert!(!changes_in_upper('A'));
        assert!(!changes_in_upper('-'));
    }
}
