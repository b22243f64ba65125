//! The compiled table graph.
//!
//! Every table appears exactly once (deduplicated by value) and descriptors
//! refer to tables by index. Vectors are already in emission order.

use crate::translit::TranslitTable;
use crate::unit::{CharClass, Step, Unit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSetTable {
    pub name: String,
    pub units: Vec<Unit>,
}

impl CharSetTable {
    pub fn contains(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u == unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTranslit {
    pub name: String,
    pub table: TranslitTable,
}

/// Base letter → ordered candidates (base first), sorted by base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiacriticsTable {
    pub name: String,
    pub entries: Vec<(Unit, Vec<Unit>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub code: String,
    pub display_name: String,
    /// Char set indices per [`CharClass`].
    pub classes: [Vec<usize>; 5],
    /// Translit indices per [`Step`].
    pub steps: [Option<usize>; 6],
    pub diacritics: Option<usize>,
    pub secondary: Option<usize>,
}

impl Descriptor {
    #[inline]
    pub fn class(&self, class: CharClass) -> &[usize] {
        &self.classes[class.index()]
    }

    #[inline]
    pub fn step(&self, step: Step) -> Option<usize> {
        self.steps[step.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub(crate) char_sets: Vec<CharSetTable>,
    pub(crate) translits: Vec<NamedTranslit>,
    pub(crate) diacritics: Vec<DiacriticsTable>,
    pub(crate) descriptors: Vec<Descriptor>,
    /// `(code, primary descriptor index)` in declaration order.
    pub(crate) registry: Vec<(String, usize)>,
    pub(crate) generic_lowercase: usize,
}

impl Artifact {
    pub fn char_sets(&self) -> &[CharSetTable] {
        &self.char_sets
    }

    pub fn translits(&self) -> &[NamedTranslit] {
        &self.translits
    }

    pub fn diacritics(&self) -> &[DiacriticsTable] {
        &self.diacritics
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn generic_lowercase(&self) -> &TranslitTable {
        &self.translits[self.generic_lowercase].table
    }

    /// Registered codes in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.iter().map(|(code, _)| code.as_str())
    }

    pub fn descriptor(&self, code: &str) -> Option<&Descriptor> {
        self.registry
            .iter()
            .find(|(c, _)| c == code)
            .map(|&(_, idx)| &self.descriptors[idx])
    }

    pub fn secondary(&self, code: &str) -> Option<&Descriptor> {
        let idx = self.descriptor(code)?.secondary?;
        Some(&self.descriptors[idx])
    }

    pub fn translit(&self, idx: usize) -> &TranslitTable {
        &self.translits[idx].table
    }

    /// Class of `unit` in `descriptor`, if any.
    pub fn classify(&self, descriptor: &Descriptor, unit: &str) -> Option<CharClass> {
        CharClass::ALL.into_iter().find(|&class| {
            descriptor
                .class(class)
                .iter()
                .any(|&idx| self.char_sets[idx].contains(unit))
        })
    }

    /// All units of one class, in emission order.
    pub fn class_units(&self, descriptor: &Descriptor, class: CharClass) -> Vec<&str> {
        descriptor
            .class(class)
            .iter()
            .flat_map(|&idx| self.char_sets[idx].units.iter().map(String::as_str))
            .collect()
    }
}
