//! Alphabet compiler.
//!
//! Turns an ordered list of [`Definition`]s (character sets, transliteration
//! tables, diacritics maps and language descriptors) into an [`Artifact`]:
//! a deduplicated, topologically ordered graph of static tables that renders
//! to byte-stable Rust source.
//!
//! ```text
//! definitions ──► pass 1: register names ──► pass 2: resolve + factor + dedup
//!                                                       │
//!                          render(&Config) ◄── Artifact ◄┘
//! ```
//!
//! The compiler is a pure function of its input. It is meant to run from a
//! build script; the runtime crate `include!`s the rendered module.

pub mod artifact;
pub mod builtin;
pub mod compiler;
pub mod config;
pub mod definition;
pub mod emit;
pub mod error;
pub mod translit;
pub mod unit;
pub mod verify;

pub use artifact::{Artifact, CharSetTable, Descriptor, DiacriticsTable, NamedTranslit};
pub use compiler::compile;
pub use config::Config;
pub use definition::{
    CharSetDef, Definition, DiacriticsDef, LanguageDef, Override, SecondaryDef, SetRef,
    TranslitBody, TranslitDef, TranslitRef,
};
pub use error::{CompileError, DefinitionKind, VerifyError};
pub use translit::TranslitTable;
pub use unit::{CharClass, Step, Unit};
pub use verify::verify;

#[cfg(test)]
mod tests {
    include!("tests/scenario.rs");
    include!("tests/builtin.rs");
    include!("tests/proptest.rs");
}
