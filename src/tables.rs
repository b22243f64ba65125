//! Static table types the generated module is built from.
//!
//! Everything here borrows `'static` data produced by the build script; none
//! of these types allocate on lookup.

use smallvec::SmallVec;
use std::borrow::Cow;

/// One element of a char set in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Consecutive codepoints, inclusive.
    Run(char, char),
    /// A multi-codepoint unit.
    Unit(&'static str),
}

/// A deduplicated set of alphabet units.
///
/// `spans` keeps the declared order; `index` (sorted, merged ranges) and
/// `strings` (sorted) answer membership by binary search.
#[derive(Debug)]
pub struct CharSet {
    pub(crate) name: &'static str,
    pub(crate) spans: &'static [Span],
    pub(crate) index: &'static [(char, char)],
    pub(crate) strings: &'static [&'static str],
    pub(crate) len: usize,
}

impl CharSet {
    /// Table name, or `""` when the artifact was built without names.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        self.index
            .binary_search_by(|&(lo, hi)| {
                if hi < c {
                    std::cmp::Ordering::Less
                } else if lo > c {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Membership of a single codepoint or a multi-codepoint unit.
    pub fn contains(&self, unit: &str) -> bool {
        let mut chars = unit.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.contains_char(c),
            (Some(_), Some(_)) => self.strings.binary_search_by(|s| (*s).cmp(unit)).is_ok(),
            _ => false,
        }
    }

    /// Units in declaration order.
    pub fn units(&self) -> impl Iterator<Item = Cow<'static, str>> + '_ {
        self.spans.iter().flat_map(|span| -> Box<dyn Iterator<Item = Cow<'static, str>>> {
            match *span {
                Span::Run(lo, hi) => Box::new((lo..=hi).map(|c| Cow::Owned(c.to_string()))),
                Span::Unit(s) => Box::new(std::iter::once(Cow::Borrowed(s))),
            }
        })
    }
}

/// A flattened transliteration table.
///
/// `map` and `remove` are sorted by key. Application is greedy
/// longest-match, left to right; removed units map to the empty string.
#[derive(Debug)]
pub struct Translit {
    pub(crate) name: &'static str,
    pub(crate) map: &'static [(&'static str, &'static str)],
    pub(crate) remove: &'static [&'static str],
    pub(crate) max_unit_len: usize,
}

impl Translit {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty() && self.remove.is_empty()
    }

    /// Replacement for `unit`: `Some("")` when removed, `None` when untouched.
    pub fn lookup(&self, unit: &str) -> Option<&'static str> {
        if let Ok(i) = self.map.binary_search_by(|(from, _)| (*from).cmp(unit)) {
            return Some(self.map[i].1);
        }
        if self.remove.binary_search_by(|r| (*r).cmp(unit)).is_ok() {
            return Some("");
        }
        None
    }

    /// Longest match at the start of `rest`, as `(byte length, replacement)`.
    #[inline]
    fn match_at(&self, rest: &str) -> Option<(usize, &'static str)> {
        let mut ends: SmallVec<[usize; 8]> = SmallVec::new();
        for (i, c) in rest.char_indices().take(self.max_unit_len) {
            ends.push(i + c.len_utf8());
        }
        ends.iter()
            .rev()
            .find_map(|&end| self.lookup(&rest[..end]).map(|to| (end, to)))
    }

    /// Cheap pre-check: does any position of `text` start a key?
    pub fn needs_apply(&self, text: &str) -> bool {
        if self.max_unit_len == 0 {
            return false;
        }
        text.char_indices()
            .any(|(i, _)| self.match_at(&text[i..]).is_some())
    }

    /// Apply to a borrowed string; borrowed output means nothing matched.
    pub fn apply_str<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.max_unit_len == 0 {
            return Cow::Borrowed(text);
        }
        let mut out: Option<String> = None;
        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];
            match self.match_at(rest) {
                Some((len, to)) => {
                    out.get_or_insert_with(|| {
                        let mut buf = String::with_capacity(text.len());
                        buf.push_str(&text[..pos]);
                        buf
                    })
                    .push_str(to);
                    pos += len;
                }
                None => {
                    let step = rest.chars().next().map_or(1, char::len_utf8);
                    if let Some(buf) = out.as_mut() {
                        buf.push_str(&rest[..step]);
                    }
                    pos += step;
                }
            }
        }
        out.map_or(Cow::Borrowed(text), Cow::Owned)
    }

    /// Apply, keeping `text` untouched (and unallocated) when nothing matches.
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => self.apply_str(s),
            Cow::Owned(s) => match self.apply_str(&s) {
                Cow::Borrowed(_) => Cow::Owned(s),
                Cow::Owned(changed) => Cow::Owned(changed),
            },
        }
    }
}

/// Base letter → ordered restoration candidates, sorted by base.
#[derive(Debug)]
pub struct DiacriticsMap {
    pub(crate) name: &'static str,
    pub(crate) entries: &'static [(&'static str, &'static [&'static str])],
}

impl DiacriticsMap {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Candidates for `letter`, preferred first; empty when not covered.
    pub fn candidates(&self, letter: &str) -> &'static [&'static str] {
        match self.entries.binary_search_by(|(base, _)| (*base).cmp(letter)) {
            Ok(i) => self.entries[i].1,
            Err(_) => &[],
        }
    }

    /// Covered base letters, sorted.
    pub fn bases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(base, _)| *base)
    }
}
