//! Chinese, Japanese and Korean: whole Unicode blocks, no case and no steps.

use super::common::{APOSTROPHES, HYPHENS};
use crate::definition::{CharSetDef, Definition, LanguageDef, SetRef};

const CJK_IDEOGRAPHS: &str = "CJK_IDEOGRAPHS";
const BOPOMOFO: &str = "BOPOMOFO";
const KANA: &str = "KANA";
const HANGUL: &str = "HANGUL";
const CJK_APOST_AND_HYPH: &str = "CJK_APOST_AND_HYPH";

pub(super) fn definitions() -> Vec<Definition> {
    // Fullwidth apostrophe and hyphen.
    let signs: Vec<char> = APOSTROPHES
        .iter()
        .chain(HYPHENS)
        .copied()
        .chain(['\u{FF07}', '\u{FF0D}'])
        .collect();
    vec![
        CharSetDef::new(
            CJK_IDEOGRAPHS,
            vec![
                SetRef::range(0x4E00, 0x9FFF), // unified
                SetRef::range(0x3400, 0x4DBF), // extension A
                SetRef::range(0xF900, 0xFAFF), // compatibility
                SetRef::range(0x2FF0, 0x2FFB), // description characters
            ],
        )
        .into(),
        CharSetDef::range(BOPOMOFO, 0x3100, 0x312F).into(),
        CharSetDef::new(
            KANA,
            vec![
                SetRef::range(0x3040, 0x30FF), // hiragana and katakana
                SetRef::range(0xFF66, 0xFF9F), // halfwidth katakana
            ],
        )
        .into(),
        CharSetDef::new(
            HANGUL,
            vec![
                SetRef::range(0x1100, 0x11FF), // jamo
                SetRef::range(0xA960, 0xA97F), // jamo extended A
                SetRef::range(0xD7B0, 0xD7FF), // jamo extended B
                SetRef::range(0x3130, 0x318F), // compatibility jamo
                SetRef::range(0xAC00, 0xD7A3), // syllables
                SetRef::range(0xFFA0, 0xFFDC), // halfwidth
            ],
        )
        .into(),
        CharSetDef::chars(CJK_APOST_AND_HYPH, &signs).into(),
    ]
}

fn cjk(code: &str, name: &str, script: &str) -> LanguageDef {
    LanguageDef::new(code, name)
        .required(vec![SetRef::named(CJK_IDEOGRAPHS), SetRef::named(script)])
        .signs(vec![SetRef::named(CJK_APOST_AND_HYPH)])
}

pub(super) fn chi() -> LanguageDef {
    cjk("chi", "chinese", BOPOMOFO)
}

pub(super) fn jpn() -> LanguageDef {
    cjk("jpn", "japanese", KANA)
}

pub(super) fn kor() -> LanguageDef {
    cjk("kor", "korean", HANGUL)
}
