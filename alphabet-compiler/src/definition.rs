//! Declarative input of the compiler.
//!
//! Definitions refer to each other by name. Nothing is resolved here; the
//! compiler registers every name first and resolves in a second pass, so the
//! order of definitions only matters for tie-breaking in the output.

use crate::translit::TranslitTable;
use crate::unit::{CharClass, Step, Unit};

/// One entry of the definition list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    CharSet(CharSetDef),
    Translit(TranslitDef),
    Diacritics(DiacriticsDef),
    Language(LanguageDef),
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Definition::CharSet(def) => &def.name,
            Definition::Translit(def) => &def.name,
            Definition::Diacritics(def) => &def.name,
            Definition::Language(def) => &def.code,
        }
    }
}

impl From<CharSetDef> for Definition {
    fn from(def: CharSetDef) -> Self {
        Definition::CharSet(def)
    }
}

impl From<TranslitDef> for Definition {
    fn from(def: TranslitDef) -> Self {
        Definition::Translit(def)
    }
}

impl From<DiacriticsDef> for Definition {
    fn from(def: DiacriticsDef) -> Self {
        Definition::Diacritics(def)
    }
}

impl From<LanguageDef> for Definition {
    fn from(def: LanguageDef) -> Self {
        Definition::Language(def)
    }
}

// ──────────────────────────────────────────────────────────────
//  Character sets
// ──────────────────────────────────────────────────────────────

/// A reference to set contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetRef {
    /// Another declared set, by name.
    Named(String),
    /// Literal units.
    Inline(Vec<Unit>),
    /// A declared set minus `remove`, followed by `add`.
    Derived {
        base: String,
        remove: Vec<Unit>,
        add: Vec<Unit>,
    },
}

impl SetRef {
    pub fn named(name: impl Into<String>) -> Self {
        SetRef::Named(name.into())
    }

    pub fn chars(chars: &[char]) -> Self {
        SetRef::Inline(crate::unit::units(chars))
    }

    pub fn range(start: u32, end: u32) -> Self {
        SetRef::Inline(crate::unit::range_units(start, end))
    }

    pub fn derived(base: impl Into<String>, remove: &[char], add: &[char]) -> Self {
        SetRef::Derived {
            base: base.into(),
            remove: crate::unit::units(remove),
            add: crate::unit::units(add),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSetDef {
    pub name: String,
    pub parts: Vec<SetRef>,
}

impl CharSetDef {
    pub fn new(name: impl Into<String>, parts: Vec<SetRef>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }

    pub fn chars(name: impl Into<String>, chars: &[char]) -> Self {
        Self::new(name, vec![SetRef::chars(chars)])
    }

    pub fn range(name: impl Into<String>, start: u32, end: u32) -> Self {
        Self::new(name, vec![SetRef::range(start, end)])
    }
}

// ──────────────────────────────────────────────────────────────
//  Transliteration tables
// ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslitRef {
    Named(String),
    Inline(TranslitTable),
}

impl TranslitRef {
    pub fn named(name: impl Into<String>) -> Self {
        TranslitRef::Named(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslitBody {
    Literal(TranslitTable),
    /// Applied left to right.
    Compose(Vec<TranslitRef>),
    /// Later operands override earlier ones.
    Merge(Vec<TranslitRef>),
    Reverse(TranslitRef),
    UnicodeLowercase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslitDef {
    pub name: String,
    pub body: TranslitBody,
}

impl TranslitDef {
    pub fn literal(name: impl Into<String>, table: TranslitTable) -> Self {
        Self {
            name: name.into(),
            body: TranslitBody::Literal(table),
        }
    }

    pub fn compose(name: impl Into<String>, operands: &[&str]) -> Self {
        Self {
            name: name.into(),
            body: TranslitBody::Compose(operands.iter().map(|n| TranslitRef::named(*n)).collect()),
        }
    }

    pub fn merge(name: impl Into<String>, operands: &[&str]) -> Self {
        Self {
            name: name.into(),
            body: TranslitBody::Merge(operands.iter().map(|n| TranslitRef::named(*n)).collect()),
        }
    }

    pub fn reverse(name: impl Into<String>, operand: &str) -> Self {
        Self {
            name: name.into(),
            body: TranslitBody::Reverse(TranslitRef::named(operand)),
        }
    }

    pub fn unicode_lowercase(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: TranslitBody::UnicodeLowercase,
        }
    }
}

// ──────────────────────────────────────────────────────────────
//  Diacritics maps
// ──────────────────────────────────────────────────────────────

/// Groups of candidates; the first unit of each group is the plain base
/// letter and is also the first (preferred) candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiacriticsDef {
    pub name: String,
    pub groups: Vec<Vec<Unit>>,
}

impl DiacriticsDef {
    pub fn new(name: impl Into<String>, groups: &[&[char]]) -> Self {
        Self {
            name: name.into(),
            groups: groups.iter().map(|g| crate::unit::units(g)).collect(),
        }
    }
}

// ──────────────────────────────────────────────────────────────
//  Languages
// ──────────────────────────────────────────────────────────────

/// A single field replaced by a sparse secondary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    Class(CharClass, Vec<SetRef>),
    Step(Step, TranslitRef),
    Diacritics(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryDef {
    /// A complete alternate descriptor.
    Full(Box<LanguageDef>),
    /// Copy the primary descriptor of `base`, then apply `overrides`.
    Override { base: String, overrides: Vec<Override> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDef {
    pub code: String,
    pub display_name: String,
    pub classes: [Vec<SetRef>; 5],
    pub steps: [Option<TranslitRef>; 6],
    pub diacritics: Option<String>,
    pub secondary: Option<SecondaryDef>,
}

impl LanguageDef {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            classes: Default::default(),
            steps: Default::default(),
            diacritics: None,
            secondary: None,
        }
    }

    pub fn class(mut self, class: CharClass, parts: Vec<SetRef>) -> Self {
        self.classes[class.index()] = parts;
        self
    }

    pub fn required(self, parts: Vec<SetRef>) -> Self {
        self.class(CharClass::Required, parts)
    }

    pub fn normal(self, parts: Vec<SetRef>) -> Self {
        self.class(CharClass::Normal, parts)
    }

    pub fn alien(self, parts: Vec<SetRef>) -> Self {
        self.class(CharClass::Alien, parts)
    }

    pub fn accidental(self, parts: Vec<SetRef>) -> Self {
        self.class(CharClass::Accidental, parts)
    }

    pub fn signs(self, parts: Vec<SetRef>) -> Self {
        self.class(CharClass::Sign, parts)
    }

    pub fn step(mut self, step: Step, table: TranslitRef) -> Self {
        self.steps[step.index()] = Some(table);
        self
    }

    pub fn pre_converter(self, name: &str) -> Self {
        self.step(Step::PreConverter, TranslitRef::named(name))
    }

    pub fn pre_lower(self, name: &str) -> Self {
        self.step(Step::PreLower, TranslitRef::named(name))
    }

    pub fn pre_upper(self, name: &str) -> Self {
        self.step(Step::PreUpper, TranslitRef::named(name))
    }

    pub fn pre_title(self, name: &str) -> Self {
        self.step(Step::PreTitle, TranslitRef::named(name))
    }

    pub fn derenyxer(self, name: &str) -> Self {
        self.step(Step::Derenyxer, TranslitRef::named(name))
    }

    pub fn converter(self, name: &str) -> Self {
        self.step(Step::Converter, TranslitRef::named(name))
    }

    pub fn diacritics(mut self, name: &str) -> Self {
        self.diacritics = Some(name.to_owned());
        self
    }

    pub fn secondary(mut self, secondary: LanguageDef) -> Self {
        self.secondary = Some(SecondaryDef::Full(Box::new(secondary)));
        self
    }

    pub fn secondary_override(mut self, base: &str, overrides: Vec<Override>) -> Self {
        self.secondary = Some(SecondaryDef::Override {
            base: base.to_owned(),
            overrides,
        });
        self
    }

    /// Replace the fields named by `overrides`.
    pub(crate) fn apply_overrides(&mut self, overrides: &[Override]) {
        for item in overrides {
            match item {
                Override::Class(class, parts) => self.classes[class.index()] = parts.clone(),
                Override::Step(step, table) => self.steps[step.index()] = Some(table.clone()),
                Override::Diacritics(name) => self.diacritics = Some(name.clone()),
            }
        }
    }
}
