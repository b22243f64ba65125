//! Pass 1: register every named definition without resolving anything.

use crate::config::GENERIC_LOWERCASE;
use crate::definition::{CharSetDef, Definition, DiacriticsDef, LanguageDef, TranslitDef};
use crate::error::{CompileError, DefinitionKind};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

pub(crate) struct NameTable<'d> {
    pub(crate) char_sets: HashMap<&'d str, &'d CharSetDef>,
    pub(crate) translits: HashMap<&'d str, &'d TranslitDef>,
    pub(crate) diacritics: HashMap<&'d str, &'d DiacriticsDef>,
    pub(crate) languages: HashMap<&'d str, &'d LanguageDef>,
    // Declaration order. Maps above are for lookup only.
    pub(crate) char_set_order: Vec<&'d CharSetDef>,
    pub(crate) translit_order: Vec<&'d TranslitDef>,
    pub(crate) diacritics_order: Vec<&'d DiacriticsDef>,
    pub(crate) language_order: Vec<&'d LanguageDef>,
}

impl<'d> NameTable<'d> {
    pub(crate) fn register(defs: &'d [Definition]) -> Result<Self, CompileError> {
        let mut names = NameTable {
            char_sets: HashMap::new(),
            translits: HashMap::new(),
            diacritics: HashMap::new(),
            languages: HashMap::new(),
            char_set_order: Vec::new(),
            translit_order: Vec::new(),
            diacritics_order: Vec::new(),
            language_order: Vec::new(),
        };
        for def in defs {
            match def {
                Definition::CharSet(d) => {
                    claim(&mut names.char_sets, DefinitionKind::CharSet, &d.name, d)?;
                    names.char_set_order.push(d);
                }
                Definition::Translit(d) => {
                    if d.name == GENERIC_LOWERCASE {
                        return Err(CompileError::DuplicateDefinition {
                            kind: DefinitionKind::Translit,
                            name: d.name.clone(),
                        });
                    }
                    claim(&mut names.translits, DefinitionKind::Translit, &d.name, d)?;
                    names.translit_order.push(d);
                }
                Definition::Diacritics(d) => {
                    claim(&mut names.diacritics, DefinitionKind::Diacritics, &d.name, d)?;
                    names.diacritics_order.push(d);
                }
                Definition::Language(d) => {
                    validate_code(&d.code)?;
                    claim(&mut names.languages, DefinitionKind::Language, &d.code, d)?;
                    names.language_order.push(d);
                }
            }
        }
        debug!(
            target: "alphabet::compile",
            char_sets = names.char_set_order.len(),
            translits = names.translit_order.len(),
            diacritics = names.diacritics_order.len(),
            languages = names.language_order.len(),
            "registered definitions"
        );
        Ok(names)
    }
}

fn claim<'d, T>(
    map: &mut HashMap<&'d str, &'d T>,
    kind: DefinitionKind,
    name: &'d str,
    def: &'d T,
) -> Result<(), CompileError> {
    match map.entry(name) {
        Entry::Occupied(_) => Err(CompileError::DuplicateDefinition {
            kind,
            name: name.to_owned(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(def);
            Ok(())
        }
    }
}

/// Exactly three ASCII lowercase letters.
pub(crate) fn validate_code(code: &str) -> Result<(), CompileError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_lowercase()) {
        Ok(())
    } else {
        Err(CompileError::malformed(
            code,
            "language code must be three lowercase ASCII letters",
        ))
    }
}
