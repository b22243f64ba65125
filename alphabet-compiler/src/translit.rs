//! Transliteration tables and their algebra.
//!
//! A table maps source units to replacement units; units in the removal set
//! map to the empty string. Application is greedy longest-match, left to
//! right.
//!
//! A single-codepoint identity mapping changes nothing when applied, but it
//! still claims its key: merged over another table it overrides that table's
//! mapping. Such keys are kept as *pins*, apart from the real mappings, and
//! [`without_pins`](TranslitTable::without_pins) drops them once the algebra
//! is done.

use crate::unit::Unit;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TranslitTable {
    map: BTreeMap<Unit, Unit>,
    remove: BTreeSet<Unit>,
    pinned: BTreeSet<Unit>,
}

impl TranslitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(from, to)` pairs. An empty `to` marks `from` as removed.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Unit>,
        V: Into<Unit>,
    {
        let mut table = Self::new();
        for (from, to) in pairs {
            table.insert(from, to);
        }
        table
    }

    /// Add units mapped to the empty string.
    pub fn with_removed<I, U>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Unit>,
    {
        for unit in units {
            let unit = unit.into();
            self.map.remove(&unit);
            self.pinned.remove(&unit);
            self.remove.insert(unit);
        }
        self
    }

    pub fn insert(&mut self, from: impl Into<Unit>, to: impl Into<Unit>) {
        let (from, to) = (from.into(), to.into());
        if to.is_empty() {
            self.map.remove(&from);
            self.pinned.remove(&from);
            self.remove.insert(from);
            return;
        }
        self.remove.remove(&from);
        if is_identity(&from, &to) {
            self.map.remove(&from);
            self.pinned.insert(from);
        } else {
            self.pinned.remove(&from);
            self.map.insert(from, to);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty() && self.remove.is_empty() && self.pinned.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len() + self.remove.len() + self.pinned.len()
    }

    /// Mappings in key order.
    pub fn mappings(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removed units in key order.
    pub fn removals(&self) -> impl Iterator<Item = &str> + '_ {
        self.remove.iter().map(String::as_str)
    }

    /// Units mapped to themselves, in key order.
    pub fn pins(&self) -> impl Iterator<Item = &str> + '_ {
        self.pinned.iter().map(String::as_str)
    }

    /// The same table without its pins. Application is unchanged.
    pub fn without_pins(&self) -> TranslitTable {
        TranslitTable {
            map: self.map.clone(),
            remove: self.remove.clone(),
            pinned: BTreeSet::new(),
        }
    }

    /// `Some("")` for removed units, `None` when the unit is untouched.
    pub fn lookup(&self, unit: &str) -> Option<&str> {
        if let Some(to) = self.map.get(unit) {
            return Some(to.as_str());
        }
        if self.remove.contains(unit) {
            return Some("");
        }
        self.pinned.get(unit).map(String::as_str)
    }

    #[inline]
    fn covers(&self, unit: &str) -> bool {
        self.map.contains_key(unit) || self.remove.contains(unit) || self.pinned.contains(unit)
    }

    /// Mappings followed by pins as `(unit, unit)`.
    fn entries(&self) -> impl Iterator<Item = (&Unit, &Unit)> + '_ {
        self.map.iter().chain(self.pinned.iter().map(|unit| (unit, unit)))
    }

    /// Longest key, in codepoints.
    pub fn max_unit_len(&self) -> usize {
        self.map
            .keys()
            .chain(self.remove.iter())
            .chain(self.pinned.iter())
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Greedy longest-match application.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let max = self.max_unit_len();
        if max == 0 {
            return Cow::Borrowed(text);
        }
        let mut out: Option<String> = None;
        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];
            let hit = candidate_ends(rest, max)
                .rev()
                .find_map(|end| self.lookup(&rest[..end]).map(|to| (end, to)));
            match hit {
                Some((end, to)) if out.is_some() || to != &rest[..end] => {
                    out.get_or_insert_with(|| String::from(&text[..pos]))
                        .push_str(to);
                    pos += end;
                }
                Some((end, _)) => pos += end,
                None => {
                    let step = rest.chars().next().map_or(1, char::len_utf8);
                    if let Some(buf) = out.as_mut() {
                        buf.push_str(&rest[..step]);
                    }
                    pos += step;
                }
            }
        }
        match out {
            Some(buf) => Cow::Owned(buf),
            None => Cow::Borrowed(text),
        }
    }

    /// `self` then `next`, materialized into one flat table.
    ///
    /// A unit mapped by `self` is replaced by `next` applied to the mapped
    /// string; a unit removed by `self` stays removed; units `self` does not
    /// touch fall through to `next`. A unit that ends up mapped to itself is
    /// pinned.
    pub fn compose(&self, next: &TranslitTable) -> TranslitTable {
        let mut out = TranslitTable::new();
        for (from, to) in self.entries() {
            let mapped = next.apply(to);
            if mapped.is_empty() {
                out.remove.insert(from.clone());
            } else if is_identity(from, &mapped) {
                out.pinned.insert(from.clone());
            } else {
                out.map.insert(from.clone(), mapped.into_owned());
            }
        }
        out.remove.extend(self.remove.iter().cloned());
        for (from, to) in &next.map {
            if !self.covers(from) {
                out.map.insert(from.clone(), to.clone());
            }
        }
        for unit in &next.remove {
            if !self.covers(unit) {
                out.remove.insert(unit.clone());
            }
        }
        for unit in &next.pinned {
            if !self.covers(unit) {
                out.pinned.insert(unit.clone());
            }
        }
        out
    }

    /// Union of entries; `over` wins on key collisions, pins included,
    /// except that a unit already removed can never be mapped again.
    pub fn merge(&self, over: &TranslitTable) -> TranslitTable {
        let mut out = self.clone();
        for (from, to) in &over.map {
            if !out.remove.contains(from) {
                out.pinned.remove(from);
                out.map.insert(from.clone(), to.clone());
            }
        }
        for unit in &over.pinned {
            if !out.remove.contains(unit) {
                out.map.remove(unit);
                out.pinned.insert(unit.clone());
            }
        }
        for unit in &over.remove {
            out.map.remove(unit);
            out.pinned.remove(unit);
            out.remove.insert(unit.clone());
        }
        out
    }

    /// Swap keys and values. Removals are dropped; when two keys share a
    /// value, the greater key wins.
    pub fn reverse(&self) -> TranslitTable {
        let mut out = TranslitTable::new();
        for (from, to) in self.entries() {
            out.insert(to.clone(), from.clone());
        }
        out
    }

    /// Unicode default lowercase mapping for every scalar in `range`.
    pub fn unicode_lowercase(range: RangeInclusive<u32>) -> TranslitTable {
        let mut out = TranslitTable::new();
        for c in range.filter_map(char::from_u32) {
            let mut lower = c.to_lowercase();
            if lower.len() == 1 && lower.next() == Some(c) {
                continue;
            }
            out.map.insert(c.to_string(), c.to_lowercase().collect());
        }
        out
    }
}

#[inline]
fn is_identity(from: &str, to: &str) -> bool {
    from == to && from.chars().nth(1).is_none()
}

/// Byte offsets ending the first `1..=max` codepoints of `text`.
fn candidate_ends(text: &str, max: usize) -> impl DoubleEndedIterator<Item = usize> + '_ {
    let ends: Vec<usize> = text
        .char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .take(max)
        .collect();
    ends.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> TranslitTable {
        TranslitTable::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn composition_order_changes_output() {
        let a = table(&[("x", "y")]).with_removed(["z"]);
        let b = table(&[("y", "w")]);
        assert_eq!(a.compose(&b).apply("xz"), "w");
        assert_eq!(b.compose(&a).apply("xz"), "y");
    }

    #[test]
    fn compose_falls_through_to_second_table() {
        let a = table(&[("A", "a")]);
        let b = table(&[("a", "α"), ("b", "β")]);
        let composed = a.compose(&b);
        assert_eq!(composed.lookup("A"), Some("α"));
        assert_eq!(composed.lookup("b"), Some("β"));
        assert_eq!(composed.apply("Ab"), "αβ");
    }

    #[test]
    fn compose_pins_identity_results() {
        let a = table(&[("I", "ı")]);
        let b = table(&[("ı", "I")]);
        let composed = a.compose(&b);
        assert_eq!(composed.lookup("I"), Some("I"));
        assert_eq!(composed.pins().collect::<Vec<_>>(), ["I"]);
        assert_eq!(composed.lookup("ı"), Some("I"));
        assert_eq!(composed.without_pins().lookup("I"), None);
    }

    #[test]
    fn merge_overrides_but_keeps_removals() {
        let a = table(&[("’", "'"), ("q", "k")]).with_removed(["x"]);
        let b = table(&[("q", "kw"), ("x", "ks"), ("ä", "ae")]);
        let merged = a.merge(&b);
        assert_eq!(merged.lookup("q"), Some("kw"));
        assert_eq!(merged.lookup("x"), Some(""));
        assert_eq!(merged.lookup("ä"), Some("ae"));
        assert_eq!(merged.lookup("’"), Some("'"));
    }

    #[test]
    fn merge_identity_overrides_earlier_mapping() {
        let a = table(&[("a", "b"), ("c", "d")]);
        let b = table(&[("a", "a")]);
        let merged = a.merge(&b);
        assert_eq!(merged.lookup("a"), Some("a"));
        assert_eq!(merged.apply("ac"), "ad");
        assert_eq!(merged.without_pins().apply("ac"), "ad");

        // A later real mapping replaces the pin again.
        let c = table(&[("a", "e")]);
        assert_eq!(merged.merge(&c).apply("a"), "e");
        assert_eq!(merged.merge(&c).pins().count(), 0);
    }

    #[test]
    fn merge_identity_cannot_revive_a_removal() {
        let a = TranslitTable::new().with_removed(["a"]);
        let b = table(&[("a", "a")]);
        assert_eq!(a.merge(&b).lookup("a"), Some(""));
    }

    #[test]
    fn merge_removal_deletes_earlier_mapping() {
        let a = table(&[("a", "b")]);
        let b = TranslitTable::new().with_removed(["a"]);
        assert_eq!(a.merge(&b).lookup("a"), Some(""));
    }

    #[test]
    fn reverse_swaps_and_drops_removals() {
        let a = table(&[("A", "А"), ("B", "В")]).with_removed(["\u{301}"]);
        let r = a.reverse();
        assert_eq!(r.lookup("А"), Some("A"));
        assert_eq!(r.lookup("В"), Some("B"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn longest_match_wins() {
        let t = table(&[("s", "z"), ("sch", "š")]);
        assert_eq!(t.apply("schas"), "šaz");
        assert_eq!(t.max_unit_len(), 3);
    }

    #[test]
    fn apply_borrows_when_untouched() {
        let t = table(&[("a", "b")]);
        assert!(matches!(t.apply("xyz"), Cow::Borrowed(_)));
        assert!(matches!(t.apply("xaz"), Cow::Owned(_)));
    }

    #[test]
    fn identity_is_pinned_not_mapped() {
        let t = table(&[("a", "a"), ("b", "c")]);
        assert_eq!(t.mappings().count(), 1);
        assert_eq!(t.pins().collect::<Vec<_>>(), ["a"]);
        assert_eq!(t.apply("ab"), "ac");
        assert_eq!(t.without_pins(), table(&[("b", "c")]));
    }

    #[test]
    fn unicode_lowercase_covers_cyrillic_and_latin() {
        let t = TranslitTable::unicode_lowercase(0x21..=0xFFFF);
        assert_eq!(t.lookup("A"), Some("a"));
        assert_eq!(t.lookup("Ё"), Some("ё"));
        assert_eq!(t.lookup("a"), None);
        assert_eq!(t.lookup("İ"), Some("i\u{307}"));
    }
}
