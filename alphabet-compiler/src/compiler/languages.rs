//! Descriptor resolution: turn a [`LanguageDef`] into pieces and flat tables.

use super::charsets::{CharSetResolver, Piece};
use super::translits::TranslitResolver;
use crate::definition::{DiacriticsDef, LanguageDef};
use crate::error::{CompileError, DefinitionKind};
use crate::translit::TranslitTable;
use crate::unit::{CharClass, Step, Unit};
use std::collections::{BTreeMap, HashMap};

pub(crate) type DiacriticsEntries = Vec<(Unit, Vec<Unit>)>;

/// A descriptor whose char sets are still unfactored.
pub(crate) struct Pending {
    pub(crate) code: String,
    pub(crate) display_name: String,
    pub(crate) classes: [Vec<Piece>; 5],
    pub(crate) steps: [Option<(String, TranslitTable)>; 6],
    pub(crate) diacritics: Option<(String, DiacriticsEntries)>,
}

impl Pending {
    pub(crate) fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.classes.iter().flatten().copied()
    }
}

pub(crate) struct Resolvers<'r, 'n, 'd> {
    pub(crate) sets: &'r mut CharSetResolver<'n, 'd>,
    pub(crate) translits: &'r mut TranslitResolver<'n, 'd>,
    pub(crate) diacritics: &'r HashMap<&'d str, DiacriticsEntries>,
}

/// `code` is the code the descriptor reports; `label` prefixes inline table
/// names and error referrers.
pub(crate) fn resolve_language(
    def: &LanguageDef,
    code: &str,
    label: &str,
    r: &mut Resolvers<'_, '_, '_>,
) -> Result<Pending, CompileError> {
    let mut classes: [Vec<Piece>; 5] = Default::default();
    for class in CharClass::ALL {
        classes[class.index()] = r
            .sets
            .resolve_parts(&def.classes[class.index()], &format!("{label}.{class}"))?;
    }

    let mut steps: [Option<(String, TranslitTable)>; 6] = Default::default();
    for step in Step::ALL {
        if let Some(table) = &def.steps[step.index()] {
            let resolved = r.translits.resolve_ref(table, &format!("{label}.{step}"))?;
            steps[step.index()] = Some(resolved);
        }
    }

    let diacritics = match &def.diacritics {
        Some(name) => {
            let entries = r
                .diacritics
                .get(name.as_str())
                .ok_or_else(|| CompileError::undefined(DefinitionKind::Diacritics, name, label))?;
            Some((name.clone(), entries.clone()))
        }
        None => None,
    };

    Ok(Pending {
        code: code.to_owned(),
        display_name: def.display_name.clone(),
        classes,
        steps,
        diacritics,
    })
}

/// Validate groups and sort them by base letter.
pub(crate) fn resolve_diacritics(def: &DiacriticsDef) -> Result<DiacriticsEntries, CompileError> {
    let mut entries: BTreeMap<Unit, Vec<Unit>> = BTreeMap::new();
    for group in &def.groups {
        if group.len() < 2 {
            return Err(CompileError::malformed(
                &def.name,
                "a diacritics group needs a base letter and at least one variant",
            ));
        }
        if group.iter().any(String::is_empty) {
            return Err(CompileError::malformed(&def.name, "empty unit in diacritics group"));
        }
        let base = group[0].clone();
        if entries.insert(base.clone(), group.clone()).is_some() {
            return Err(CompileError::malformed(
                &def.name,
                format!("base letter {base:?} appears twice"),
            ));
        }
    }
    Ok(entries.into_iter().collect())
}
