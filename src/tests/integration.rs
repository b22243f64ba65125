#[cfg(test)]
mod integration_tests {
    use crate::{CaseMode, guess_languages, guess_secondary_languages, lookup, normalize};
    use std::borrow::Cow;

    #[test]
    fn russian_chain() {
        // Latin look-alikes are fixed by the pre-converter.
        assert_eq!(normalize("rus", "Cop").unwrap(), "сор");
        // Stress and ё are folded by the converter.
        assert_eq!(normalize("rus", "Ёлка\u{301}").unwrap(), "елка");
        assert_eq!(normalize("rus", "МОЛОКО").unwrap(), "молоко");
        assert!(normalize("xyz", "МОЛОКО").is_err());
    }

    #[test]
    fn turkish_chain() {
        let tur = lookup("tur").unwrap();
        assert_eq!(tur.normalize("\u{130}STANBUL'DA"), "istanbulda");
        assert_eq!(tur.normalize("ISPARTA"), "\u{131}sparta");
        assert_eq!(tur.normalize("Kâğıt"), "kağıt");
        assert_eq!(tur.normalize_with("istanbul", CaseMode::Upper), "\u{130}STANBUL");
        assert_eq!(tur.normalize_with("istanbul", CaseMode::Title), "\u{130}stanbul");
    }

    #[test]
    fn german_chain() {
        let ger = lookup("ger").unwrap();
        assert_eq!(ger.normalize("Straße"), "strasse");
        assert_eq!(ger.normalize("Äpfel’s"), "aepfel's");
    }

    #[test]
    fn romanian_comma_below() {
        let rum = lookup("rum").unwrap();
        assert_eq!(rum.normalize("\u{218}coal\u{103}"), "\u{15F}coal\u{103}");
        assert_eq!(rum.normalize("\u{162}ar\u{103}"), "\u{163}ar\u{103}");
    }

    #[test]
    fn kazakh_secondary_folds_to_latin() {
        let latin = lookup("kaz").unwrap().secondary().unwrap();
        assert_eq!(latin.normalize("Сор"), "cop");
        let kaz = lookup("kaz").unwrap();
        assert_eq!(kaz.normalize("Cop"), "сор");
    }

    #[test]
    fn pre_convert_composes_first() {
        let rus = lookup("rus").unwrap();
        assert_eq!(rus.pre_convert("\u{415}\u{308}\u{43B}\u{43A}\u{430}"), "ёлка");
        let tur = lookup("tur").unwrap();
        assert_eq!(tur.pre_convert("I\u{302}"), "\u{EE}");
        let eng = lookup("eng").unwrap();
        let input = "plain";
        assert!(matches!(eng.pre_convert(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn normalization_is_zero_copy_when_nothing_changes() {
        let eng = lookup("eng").unwrap();
        let input = "already lower";
        assert!(matches!(eng.normalize(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        let rus = lookup("rus").unwrap();
        assert!(matches!(rus.normalize("молоко"), Cow::Borrowed(_)));
    }

    #[test]
    fn is_normalized() {
        let rus = lookup("rus").unwrap();
        assert!(rus.is_normalized("ёлка"));
        assert!(!rus.is_normalized("cop"));
        assert!(!rus.is_normalized("ёлка\u{301}"));
        let eng = lookup("eng").unwrap();
        assert!(eng.is_normalized("don't"));
        assert!(!eng.is_normalized("café"));
        assert!(eng.is_normalized(""));
    }

    #[test]
    fn guessing_primary_languages() {
        let guesses = guess_languages("ёлка");
        for code in ["bel", "kaz", "rus"] {
            assert!(guesses.contains(&code), "{code} missing from {guesses:?}");
        }
        assert!(!guesses.contains(&"bul"));
        assert!(!guesses.contains(&"eng"));

        let guesses = guess_languages("hello");
        assert!(guesses.contains(&"eng"));
        assert!(!guesses.contains(&"rus"));

        assert!(guess_languages("").is_empty());
        assert!(guess_languages("'-'").is_empty());
        assert!(guess_languages("日本語").contains(&"jpn"));
    }

    #[test]
    fn guessing_secondary_languages() {
        // Copied secondaries report "eng"; guesses name the owning primary.
        assert_eq!(lookup("tur").unwrap().secondary().unwrap().code(), "eng");
        assert_eq!(guess_secondary_languages("cop"), ["kaz", "rus", "tur", "ukr"]);
        assert!(guess_secondary_languages("сор").is_empty());
    }
}
