//! The builtin alphabets.
//!
//! Shared sets and tables come first, then the languages in registry order.
//! Languages refer to shared data by name only; the compiler resolves and
//! deduplicates.

mod cjk;
mod common;
mod cyrillic;
mod latin;
mod other;

use crate::definition::{Definition, LanguageDef};

/// Every builtin definition, in declaration order.
pub fn definitions() -> Vec<Definition> {
    let mut defs = common::definitions();
    defs.extend(cjk::definitions());
    defs.extend(cyrillic::definitions());
    defs.extend(latin::definitions());
    defs.extend(other::definitions());
    defs.extend(languages().into_iter().map(Definition::from));
    defs
}

fn languages() -> Vec<LanguageDef> {
    vec![
        other::ara(),
        other::arm(),
        cyrillic::bak(),
        cyrillic::bel(),
        cyrillic::bul(),
        cjk::chi(),
        cyrillic::chu(),
        latin::cze(),
        latin::dan(),
        latin::dut(),
        latin::eng(),
        latin::est(),
        latin::fin(),
        latin::fre(),
        other::geo(),
        latin::ger(),
        latin::gle(),
        other::gre(),
        other::heb(),
        latin::hun(),
        latin::ind(),
        latin::ita(),
        cjk::jpn(),
        cyrillic::kaz(),
        cjk::kor(),
        latin::lav(),
        latin::lit(),
        latin::nor(),
        latin::pol(),
        latin::por(),
        latin::rum(),
        cyrillic::rus(),
        latin::spa(),
        cyrillic::tat(),
        latin::tur(),
        cyrillic::ukr(),
        // Later additions.
        latin::aze(),
        cyrillic::kir(),
        cyrillic::mon(),
        latin::swe(),
        cyrillic::tgk(),
        latin::tgl(),
        latin::tuk(),
        cyrillic::uzb(),
    ]
}

/// Codes of the builtin languages, in registry order.
pub fn codes() -> Vec<String> {
    languages().into_iter().map(|def| def.code).collect()
}
