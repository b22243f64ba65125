//! Compiled per-language alphabets for morphological analysis.
//!
//! The tables are produced at build time by `alphabet-compiler` and baked in
//! as statics; nothing is parsed or allocated at load time.
//!
//! ```
//! use alphabet::{CharClass, lookup};
//!
//! let rus = lookup("rus").unwrap();
//! assert_eq!(rus.classify('ж'), CharClass::Normal);
//! assert_eq!(rus.classify('c'), CharClass::Alien);
//! assert_eq!(rus.normalize("Ёлка"), "елка");
//! ```

pub mod alphabet;
pub mod context;
mod data;
pub mod process;
pub mod registry;
pub mod stage;
pub mod tables;
pub mod unicode;

pub use alphabet::{Alphabet, CaseMode, CharClass, Step};
pub use context::Context;
pub use process::Pipeline;
pub use registry::{
    LookupError, alphabets, classify, default_alphabet, generic_lowercase, guess_languages,
    guess_secondary_languages, list_codes, lookup, lookup_or_default, normalize,
    restore_diacritics, secondaries,
};
pub use stage::Stage;
pub use stage::case_fold::CaseFold;
pub use stage::normalization::{Nfc, Nfd};
pub use stage::transliterate::Transliterate;
pub use tables::{CharSet, DiacriticsMap, Span, Translit};
