//! Two-pass compilation.
//!
//! Pass 1 ([`names`]) registers every declared name. Pass 2 resolves all
//! references with cycle detection, resolves sparse secondaries once every
//! primary is known, factors char sets, deduplicates tables by value and
//! assembles the [`Artifact`] in emission order.

mod charsets;
mod interner;
mod languages;
mod names;
mod translits;

use crate::artifact::{Artifact, CharSetTable, Descriptor, DiacriticsTable, NamedTranslit};
use crate::config::{Config, GENERIC_LOWERCASE};
use crate::definition::{Definition, Override, SecondaryDef};
use crate::error::{CompileError, DefinitionKind};
use crate::translit::TranslitTable;
use crate::unit::{CharClass, Step, Unit};
use charsets::{CharSetResolver, Factoring};
use interner::Interner;
use languages::{DiacriticsEntries, Pending, Resolvers, resolve_diacritics, resolve_language};
use names::NameTable;
use translits::TranslitResolver;
use std::collections::HashMap;
use tracing::{debug, info};

/// Compile `defs` into an artifact.
///
/// Pure: the same definitions and config always produce the same artifact.
pub fn compile(defs: &[Definition], config: &Config) -> Result<Artifact, CompileError> {
    let names = NameTable::register(defs)?;
    Compiler {
        config,
        names: &names,
    }
    .run()
}

struct Compiler<'n, 'd> {
    config: &'n Config,
    names: &'n NameTable<'d>,
}

/// A registered language and its (optional) secondary, both unfactored.
struct Entry {
    primary: Pending,
    secondary: Option<Pending>,
}

impl<'n, 'd> Compiler<'n, 'd> {
    fn run(self) -> Result<Artifact, CompileError> {
        let mut sets = CharSetResolver::new(self.names);
        let mut translits = TranslitResolver::new(self.names, self.config);

        // Declared artifacts are validated even when no language uses them.
        for def in &self.names.char_set_order {
            sets.resolve_named(&def.name, &def.name)?;
        }
        for def in &self.names.translit_order {
            translits.resolve_named(&def.name, &def.name)?;
        }
        let mut diacritics: HashMap<&'d str, DiacriticsEntries> = HashMap::new();
        for def in &self.names.diacritics_order {
            diacritics.insert(def.name.as_str(), resolve_diacritics(def)?);
        }
        debug!(target: "alphabet::compile", "resolved shared definitions");

        let mut resolvers = Resolvers {
            sets: &mut sets,
            translits: &mut translits,
            diacritics: &diacritics,
        };

        let mut entries = Vec::with_capacity(self.names.language_order.len());
        let mut deferred: Vec<(usize, &'d str, &'d [Override])> = Vec::new();
        for (idx, &lang) in self.names.language_order.iter().enumerate() {
            let primary = resolve_language(lang, &lang.code, &lang.code, &mut resolvers)?;
            let secondary = match &lang.secondary {
                None => None,
                Some(SecondaryDef::Full(def)) => Some(resolve_language(
                    def,
                    &lang.code,
                    &format!("{}/secondary", lang.code),
                    &mut resolvers,
                )?),
                Some(SecondaryDef::Override { base, overrides }) => {
                    deferred.push((idx, base.as_str(), overrides.as_slice()));
                    None
                }
            };
            entries.push(Entry { primary, secondary });
        }
        debug!(
            target: "alphabet::compile",
            primaries = entries.len(),
            deferred = deferred.len(),
            "resolved primary descriptors"
        );

        self.check_overrides(&deferred)?;
        for &(idx, base, overrides) in &deferred {
            let code = self.names.language_order[idx].code.as_str();
            let Some(base_def) = self.names.languages.get(base) else {
                return Err(CompileError::undefined(DefinitionKind::Language, base, code));
            };
            let mut def = (*base_def).clone();
            def.secondary = None;
            def.apply_overrides(overrides);
            // The copy is the base language with a few fields swapped, so it
            // reports the base's code and name.
            let label = format!("{code}/secondary");
            entries[idx].secondary =
                Some(resolve_language(&def, &def.code, &label, &mut resolvers)?);
        }

        let generic = translits.generic().clone();
        let used: Vec<_> = entries
            .iter()
            .flat_map(|e| e.secondary.iter().chain(std::iter::once(&e.primary)))
            .flat_map(Pending::pieces)
            .collect();
        let factoring = sets.finish(used);

        let artifact = assemble(entries, &factoring, generic)?;
        for descriptor in &artifact.descriptors {
            check_disjoint(&artifact, descriptor)?;
        }
        info!(
            target: "alphabet::compile",
            char_sets = artifact.char_sets.len(),
            translits = artifact.translits.len(),
            diacritics = artifact.diacritics.len(),
            descriptors = artifact.descriptors.len(),
            "compiled alphabets"
        );
        Ok(artifact)
    }

    /// Every sparse override must name a registered language, and following
    /// override edges must never come back to the start.
    fn check_overrides(
        &self,
        deferred: &[(usize, &'d str, &'d [Override])],
    ) -> Result<(), CompileError> {
        let mut edges: HashMap<&str, &str> = HashMap::new();
        for &(idx, base, _) in deferred {
            let code = self.names.language_order[idx].code.as_str();
            if !self.names.languages.contains_key(base) {
                return Err(CompileError::undefined(DefinitionKind::Language, base, code));
            }
            edges.insert(code, base);
        }
        for &(idx, _, _) in deferred {
            let start = self.names.language_order[idx].code.as_str();
            let mut path = vec![start];
            let mut current = start;
            while let Some(&next) = edges.get(current) {
                if let Some(pos) = path.iter().position(|c| *c == next) {
                    let mut cycle: Vec<String> = path[pos..].iter().map(|c| c.to_string()).collect();
                    cycle.push(next.to_owned());
                    return Err(CompileError::CyclicReference { path: cycle });
                }
                path.push(next);
                current = next;
            }
        }
        Ok(())
    }
}

/// Intern tables in first-reach order and lay descriptors out with each
/// secondary directly before its primary.
fn assemble(
    entries: Vec<Entry>,
    factoring: &Factoring,
    generic: TranslitTable,
) -> Result<Artifact, CompileError> {
    let mut sets: Interner<Vec<Unit>> = Interner::new();
    let mut translits: Interner<TranslitTable> = Interner::new();
    let mut diacritics: Interner<DiacriticsEntries> = Interner::new();
    let generic_lowercase = translits.intern(GENERIC_LOWERCASE, generic);

    let mut descriptors = Vec::new();
    let mut registry = Vec::with_capacity(entries.len());
    for entry in entries {
        let secondary = match entry.secondary {
            Some(pending) => {
                let d = lower(pending, factoring, &mut sets, &mut translits, &mut diacritics);
                descriptors.push(d);
                Some(descriptors.len() - 1)
            }
            None => None,
        };
        let mut primary = lower(entry.primary, factoring, &mut sets, &mut translits, &mut diacritics);
        primary.secondary = secondary;
        registry.push((primary.code.clone(), descriptors.len()));
        descriptors.push(primary);
    }

    check_handle(sets.len(), DefinitionKind::CharSet)?;
    check_handle(translits.len(), DefinitionKind::Translit)?;
    check_handle(diacritics.len(), DefinitionKind::Diacritics)?;
    check_handle(descriptors.len(), DefinitionKind::Language)?;

    Ok(Artifact {
        char_sets: sets
            .into_items()
            .into_iter()
            .map(|(name, units)| CharSetTable { name, units })
            .collect(),
        translits: translits
            .into_items()
            .into_iter()
            .map(|(name, table)| NamedTranslit { name, table })
            .collect(),
        diacritics: diacritics
            .into_items()
            .into_iter()
            .map(|(name, entries)| DiacriticsTable { name, entries })
            .collect(),
        descriptors,
        registry,
        generic_lowercase,
    })
}

fn lower(
    pending: Pending,
    factoring: &Factoring,
    sets: &mut Interner<Vec<Unit>>,
    translits: &mut Interner<TranslitTable>,
    diacritics: &mut Interner<DiacriticsEntries>,
) -> Descriptor {
    let mut classes: [Vec<usize>; 5] = Default::default();
    for class in CharClass::ALL {
        let ids = &mut classes[class.index()];
        for piece in &pending.classes[class.index()] {
            for block in factoring.blocks(*piece) {
                let id = sets.intern(&block.name, block.units.clone());
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
    }

    let mut steps: [Option<usize>; 6] = [None; 6];
    for step in Step::ALL {
        if let Some((name, table)) = &pending.steps[step.index()] {
            steps[step.index()] = Some(translits.intern(name, table.without_pins()));
        }
    }

    let diacritics = pending
        .diacritics
        .map(|(name, entries)| diacritics.intern(&name, entries));

    Descriptor {
        code: pending.code,
        display_name: pending.display_name,
        classes,
        steps,
        diacritics,
        secondary: None,
    }
}

fn check_handle(count: usize, kind: DefinitionKind) -> Result<(), CompileError> {
    if count > usize::from(u16::MAX) + 1 {
        return Err(CompileError::TooManyTables { kind });
    }
    Ok(())
}

/// The five classes of one descriptor must be pairwise disjoint.
fn check_disjoint(artifact: &Artifact, descriptor: &Descriptor) -> Result<(), CompileError> {
    let mut owner: HashMap<&str, CharClass> = HashMap::new();
    for class in CharClass::ALL {
        for unit in artifact.class_units(descriptor, class) {
            match owner.get(unit) {
                Some(&first) if first != class => {
                    return Err(CompileError::ClassOverlap {
                        code: descriptor.code.clone(),
                        unit: unit.to_owned(),
                        first,
                        second: class,
                    });
                }
                Some(_) => {}
                None => {
                    owner.insert(unit, class);
                }
            }
        }
    }
    Ok(())
}
