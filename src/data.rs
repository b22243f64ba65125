//! The compiled builtin alphabets, generated by `build.rs`.

use crate::alphabet::Alphabet;
use crate::tables::{CharSet, DiacriticsMap, Span, Translit};

include!(concat!(env!("OUT_DIR"), "/alphabets.rs"));
