//! Rust source emission.
//!
//! The artifact is rendered as a flat list of `static` items. Each table is a
//! single line so a mismatch against the canonical copy points at exactly one
//! table. The output depends only on the artifact and the config; nothing is
//! read from hash map iteration order.
//!
//! The including module must have `CharSet`, `Span`, `Translit`,
//! `DiacriticsMap` and `Alphabet` in scope, and `phf` available.

use crate::artifact::{Artifact, CharSetTable, Descriptor, DiacriticsTable, NamedTranslit};
use crate::config::Config;
use crate::unit::Unit;
use proc_macro2::TokenStream;
use quote::quote;

/// One emitted element of a char set, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Consecutive codepoints, inclusive.
    Run(char, char),
    /// A multi-codepoint unit.
    Unit(&'a str),
}

/// Coalesce consecutive single codepoints into runs, keeping order.
pub fn spans(units: &[Unit]) -> Vec<Span<'_>> {
    let mut out: Vec<Span<'_>> = Vec::new();
    for unit in units {
        let Some(c) = single_char(unit) else {
            out.push(Span::Unit(unit));
            continue;
        };
        if let Some(Span::Run(_, hi)) = out.last_mut() {
            if u32::from(*hi) + 1 == u32::from(c) {
                *hi = c;
                continue;
            }
        }
        out.push(Span::Run(c, c));
    }
    out
}

/// Sorted, merged ranges of the single-codepoint members.
pub fn range_index(units: &[Unit]) -> Vec<(char, char)> {
    let mut chars: Vec<char> = units.iter().filter_map(|u| single_char(u)).collect();
    chars.sort_unstable();
    chars.dedup();
    let mut out: Vec<(char, char)> = Vec::new();
    for c in chars {
        match out.last_mut() {
            Some((_, hi)) if u32::from(*hi) + 1 == u32::from(c) => *hi = c,
            _ => out.push((c, c)),
        }
    }
    out
}

fn single_char(unit: &str) -> Option<char> {
    let mut chars = unit.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// Indices are bounded by `TooManyTables` during assembly.
#[inline]
fn handle(idx: usize) -> u16 {
    idx as u16
}

fn opt_handle(idx: Option<usize>) -> TokenStream {
    match idx.map(handle) {
        Some(h) => quote! { Some(#h) },
        None => quote! { None },
    }
}

impl Artifact {
    /// Render the artifact as a Rust module body.
    pub fn render(&self, config: &Config) -> String {
        let mut out = String::new();
        push_line(&mut out, &format!("// {}", config.header));
        push_line(
            &mut out,
            &format!(
                "// {} char sets, {} translit tables, {} diacritics maps, {} descriptors, {} languages.",
                self.char_sets.len(),
                self.translits.len(),
                self.diacritics.len(),
                self.descriptors.len(),
                self.registry.len(),
            ),
        );
        push_line(&mut out, "");

        let name = |n: &str| if config.emit_names { n.to_owned() } else { String::new() };

        push_line(&mut out, "pub(crate) static CHAR_SETS: &[CharSet] = &[");
        for set in &self.char_sets {
            push_item(&mut out, render_char_set(set, &name(&set.name)));
        }
        push_line(&mut out, "];");
        push_line(&mut out, "");

        push_line(&mut out, "pub(crate) static TRANSLITS: &[Translit] = &[");
        for translit in &self.translits {
            push_item(&mut out, render_translit(translit, &name(&translit.name)));
        }
        push_line(&mut out, "];");
        push_line(&mut out, "");

        push_line(&mut out, "pub(crate) static DIACRITICS: &[DiacriticsMap] = &[");
        for map in &self.diacritics {
            push_item(&mut out, render_diacritics(map, &name(&map.name)));
        }
        push_line(&mut out, "];");
        push_line(&mut out, "");

        push_line(&mut out, "pub(crate) static ALPHABETS: &[Alphabet] = &[");
        for descriptor in &self.descriptors {
            push_item(&mut out, render_descriptor(descriptor));
        }
        push_line(&mut out, "];");
        push_line(&mut out, "");

        let generic = handle(self.generic_lowercase);
        push_line(
            &mut out,
            &quote! { pub(crate) const GENERIC_LOWERCASE: u16 = #generic; }.to_string(),
        );
        push_line(&mut out, "");

        push_line(&mut out, "pub(crate) static CODES: &[&str] = &[");
        for (code, _) in &self.registry {
            push_item(&mut out, quote! { #code });
        }
        push_line(&mut out, "];");
        push_line(&mut out, "");

        push_line(
            &mut out,
            "pub(crate) static REGISTRY: phf::Map<&'static str, u16> = phf::phf_map! {",
        );
        for (code, idx) in &self.registry {
            let h = handle(*idx);
            push_item(&mut out, quote! { #code => #h });
        }
        push_line(&mut out, "};");
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_item(out: &mut String, item: TokenStream) {
    out.push_str(&item.to_string());
    out.push_str(",\n");
}

fn render_char_set(set: &CharSetTable, name: &str) -> TokenStream {
    let spans = spans(&set.units).into_iter().map(|span| match span {
        Span::Run(lo, hi) => quote! { Span::Run(#lo, #hi) },
        Span::Unit(s) => quote! { Span::Unit(#s) },
    });
    let index = range_index(&set.units)
        .into_iter()
        .map(|(lo, hi)| quote! { (#lo, #hi) });
    let mut strings: Vec<&str> = set
        .units
        .iter()
        .map(String::as_str)
        .filter(|u| single_char(u).is_none())
        .collect();
    strings.sort_unstable();
    let len = set.units.len();
    quote! {
        CharSet {
            name: #name,
            spans: &[#(#spans),*],
            index: &[#(#index),*],
            strings: &[#(#strings),*],
            len: #len,
        }
    }
}

fn render_translit(translit: &NamedTranslit, name: &str) -> TokenStream {
    let table = &translit.table;
    let map = table.mappings().map(|(from, to)| quote! { (#from, #to) });
    let remove = table.removals();
    let max = table.max_unit_len();
    quote! {
        Translit {
            name: #name,
            map: &[#(#map),*],
            remove: &[#(#remove),*],
            max_unit_len: #max,
        }
    }
}

fn render_diacritics(map: &DiacriticsTable, name: &str) -> TokenStream {
    let entries = map.entries.iter().map(|(base, candidates)| {
        quote! { (#base, &[#(#candidates),*]) }
    });
    quote! {
        DiacriticsMap {
            name: #name,
            entries: &[#(#entries),*],
        }
    }
}

fn render_descriptor(d: &Descriptor) -> TokenStream {
    let code = &d.code;
    let name = &d.display_name;
    let classes = d.classes.iter().map(|ids| {
        let ids = ids.iter().map(|&i| handle(i));
        quote! { &[#(#ids),*] }
    });
    let steps = d.steps.iter().map(|&s| opt_handle(s));
    let diacritics = opt_handle(d.diacritics);
    let secondary = opt_handle(d.secondary);
    quote! {
        Alphabet {
            code: #code,
            name: #name,
            classes: [#(#classes),*],
            steps: [#(#steps),*],
            diacritics: #diacritics,
            secondary: #secondary,
        }
    }
}
