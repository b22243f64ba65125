//! Character set resolution and factoring.
//!
//! Every literal run of units becomes a *leaf*. Named sets resolve to an
//! ordered list of [`Piece`]s, each a leaf optionally minus a removal set
//! (from [`SetRef::Derived`]). Once all descriptors are resolved, each leaf
//! is split into blocks by which removals touch each unit; a piece then maps
//! to the blocks its removal does not cover. Languages that share most of a
//! set therefore share the common block and differ only in small ones.
//!
//! Units keep their declared order inside a block, and blocks are ordered by
//! their first unit. A split leaf therefore lists the units touched by a
//! removal after the untouched ones that precede them.

use super::interner::Interner;
use super::names::NameTable;
use crate::definition::SetRef;
use crate::error::{CompileError, DefinitionKind};
use crate::unit::Unit;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Piece {
    leaf: usize,
    minus: Option<usize>,
}

pub(crate) struct CharSetResolver<'n, 'd> {
    names: &'n NameTable<'d>,
    leaves: Interner<Vec<Unit>>,
    removals: Interner<BTreeSet<Unit>>,
    memo: HashMap<&'d str, Vec<Piece>>,
    stack: Vec<&'d str>,
}

impl<'n, 'd> CharSetResolver<'n, 'd> {
    pub(crate) fn new(names: &'n NameTable<'d>) -> Self {
        Self {
            names,
            leaves: Interner::new(),
            removals: Interner::new(),
            memo: HashMap::new(),
            stack: Vec::new(),
        }
    }

    pub(crate) fn resolve_named(
        &mut self,
        name: &str,
        referrer: &str,
    ) -> Result<Vec<Piece>, CompileError> {
        let def = *self
            .names
            .char_sets
            .get(name)
            .ok_or_else(|| CompileError::undefined(DefinitionKind::CharSet, name, referrer))?;
        if let Some(pieces) = self.memo.get(def.name.as_str()) {
            return Ok(pieces.clone());
        }
        if let Some(pos) = self.stack.iter().position(|n| *n == def.name) {
            let mut path: Vec<String> = self.stack[pos..].iter().map(|n| n.to_string()).collect();
            path.push(def.name.clone());
            return Err(CompileError::CyclicReference { path });
        }

        self.stack.push(&def.name);
        let resolved = self.resolve_parts(&def.parts, &def.name);
        self.stack.pop();

        let pieces = resolved?;
        self.memo.insert(&def.name, pieces.clone());
        Ok(pieces)
    }

    pub(crate) fn resolve_parts(
        &mut self,
        parts: &[SetRef],
        owner: &str,
    ) -> Result<Vec<Piece>, CompileError> {
        let single = parts.len() == 1;
        let mut pieces = Vec::new();
        for (i, part) in parts.iter().enumerate() {
            match part {
                SetRef::Named(name) => pieces.extend(self.resolve_named(name, owner)?),
                SetRef::Inline(units) => {
                    let label = if single {
                        owner.to_owned()
                    } else {
                        format!("{owner}#{i}")
                    };
                    pieces.extend(self.leaf(&label, units)?);
                }
                SetRef::Derived { base, remove, add } => {
                    let base_pieces = self.resolve_named(base, owner)?;
                    let removal: BTreeSet<Unit> = remove.iter().cloned().collect();
                    self.warn_absent(base, owner, &base_pieces, &removal);
                    for piece in base_pieces {
                        let minus = match piece.minus {
                            Some(prev) => self.removals.get(prev).union(&removal).cloned().collect(),
                            None => removal.clone(),
                        };
                        let minus = if minus.is_empty() {
                            None
                        } else {
                            Some(self.removals.intern(owner, minus))
                        };
                        pieces.push(Piece {
                            leaf: piece.leaf,
                            minus,
                        });
                    }
                    pieces.extend(self.leaf(&format!("{owner}#{i}+"), add)?);
                }
            }
        }
        Ok(pieces)
    }

    fn leaf(&mut self, label: &str, units: &[Unit]) -> Result<Option<Piece>, CompileError> {
        if units.iter().any(String::is_empty) {
            return Err(CompileError::malformed(label, "empty unit in char set"));
        }
        let mut seen = HashSet::new();
        let units: Vec<Unit> = units
            .iter()
            .filter(|u| seen.insert(u.as_str()))
            .cloned()
            .collect();
        if units.is_empty() {
            return Ok(None);
        }
        Ok(Some(Piece {
            leaf: self.leaves.intern(label, units),
            minus: None,
        }))
    }

    fn warn_absent(&self, base: &str, owner: &str, pieces: &[Piece], removal: &BTreeSet<Unit>) {
        for unit in removal {
            let present = pieces
                .iter()
                .any(|p| self.leaves.get(p.leaf).contains(unit));
            if !present {
                warn!(
                    target: "alphabet::compile",
                    owner,
                    base,
                    unit = unit.as_str(),
                    "removed unit is not part of the base set"
                );
            }
        }
    }

    /// Split every leaf by the removals applied through `used` pieces.
    pub(crate) fn finish(self, used: impl IntoIterator<Item = Piece>) -> Factoring {
        let mut applied: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); self.leaves.len()];
        for piece in used {
            if let Some(r) = piece.minus {
                applied[piece.leaf].insert(r);
            }
        }
        let removals = self.removals;
        let blocks = self
            .leaves
            .into_items()
            .into_iter()
            .zip(applied)
            .map(|((name, units), applied)| split(name, units, &applied, &removals))
            .collect();
        Factoring { blocks }
    }
}

#[derive(Debug)]
pub(crate) struct Block {
    pub(crate) name: String,
    pub(crate) units: Vec<Unit>,
    signature: Vec<usize>,
}

pub(crate) struct Factoring {
    blocks: Vec<Vec<Block>>,
}

impl Factoring {
    /// Blocks of `piece`'s leaf that survive its removal, in leaf order.
    pub(crate) fn blocks(&self, piece: Piece) -> impl Iterator<Item = &Block> + '_ {
        self.blocks[piece.leaf]
            .iter()
            .filter(move |b| piece.minus.is_none_or(|r| !b.signature.contains(&r)))
    }
}

fn split(
    name: String,
    units: Vec<Unit>,
    applied: &BTreeSet<usize>,
    removals: &Interner<BTreeSet<Unit>>,
) -> Vec<Block> {
    let mut groups: Vec<(Vec<usize>, Vec<Unit>)> = Vec::new();
    for unit in units {
        let signature: Vec<usize> = applied
            .iter()
            .copied()
            .filter(|&r| removals.get(r).contains(&unit))
            .collect();
        match groups.iter_mut().find(|(sig, _)| *sig == signature) {
            Some((_, members)) => members.push(unit),
            None => groups.push((signature, vec![unit])),
        }
    }
    let whole = groups.len() == 1;
    groups
        .into_iter()
        .enumerate()
        .map(|(k, (signature, units))| Block {
            name: if whole {
                name.clone()
            } else {
                format!("{name}/{}", k + 1)
            },
            units,
            signature,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CharSetDef, Definition};

    fn defs() -> Vec<Definition> {
        vec![
            CharSetDef::chars("BASE", &['a', 'b', 'c', 'd', 'e']).into(),
            CharSetDef::new("LEFT", vec![SetRef::derived("BASE", &['d'], &['x'])]).into(),
            CharSetDef::new("RIGHT", vec![SetRef::derived("BASE", &['d', 'e'], &[])]).into(),
            CharSetDef::new("LOOP_A", vec![SetRef::named("LOOP_B")]).into(),
            CharSetDef::new("LOOP_B", vec![SetRef::named("LOOP_A")]).into(),
        ]
    }

    fn units_of<'f>(factoring: &'f Factoring, pieces: &[Piece]) -> Vec<Vec<&'f str>> {
        pieces
            .iter()
            .flat_map(|p| factoring.blocks(*p))
            .map(|b| b.units.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn derived_sets_share_the_common_block() {
        let defs = defs();
        let names = NameTable::register(&defs).unwrap();
        let mut sets = CharSetResolver::new(&names);
        let base = sets.resolve_named("BASE", "test").unwrap();
        let left = sets.resolve_named("LEFT", "test").unwrap();
        let right = sets.resolve_named("RIGHT", "test").unwrap();
        let used: Vec<Piece> = base.iter().chain(&left).chain(&right).copied().collect();
        let factoring = sets.finish(used);

        assert_eq!(
            units_of(&factoring, &base),
            vec![vec!["a", "b", "c"], vec!["d"], vec!["e"]]
        );
        assert_eq!(
            units_of(&factoring, &left),
            vec![vec!["a", "b", "c"], vec!["e"], vec!["x"]]
        );
        assert_eq!(units_of(&factoring, &right), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn blocks_keep_first_occurrence_order() {
        let defs: Vec<Definition> = vec![
            CharSetDef::chars("BASE", &['a', 'b', 'c', 'd', 'e']).into(),
            CharSetDef::new("ODD", vec![SetRef::derived("BASE", &['b', 'd'], &[])]).into(),
        ];
        let names = NameTable::register(&defs).unwrap();
        let mut sets = CharSetResolver::new(&names);
        let base = sets.resolve_named("BASE", "test").unwrap();
        let odd = sets.resolve_named("ODD", "test").unwrap();
        let used: Vec<Piece> = base.iter().chain(&odd).copied().collect();
        let factoring = sets.finish(used);

        assert_eq!(
            units_of(&factoring, &base),
            vec![vec!["a", "c", "e"], vec!["b", "d"]]
        );
        assert_eq!(units_of(&factoring, &odd), vec![vec!["a", "c", "e"]]);
        let names: Vec<&str> = factoring.blocks(base[0]).map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["BASE/1", "BASE/2"]);
    }

    #[test]
    fn unsplit_leaf_keeps_its_name() {
        let defs = defs();
        let names = NameTable::register(&defs).unwrap();
        let mut sets = CharSetResolver::new(&names);
        let base = sets.resolve_named("BASE", "test").unwrap();
        let factoring = sets.finish(base.clone());
        let blocks: Vec<&Block> = factoring.blocks(base[0]).collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "BASE");
    }

    #[test]
    fn cycle_is_reported_with_path() {
        let defs = defs();
        let names = NameTable::register(&defs).unwrap();
        let mut sets = CharSetResolver::new(&names);
        let err = sets.resolve_named("LOOP_A", "test").unwrap_err();
        assert_eq!(
            err,
            CompileError::CyclicReference {
                path: vec!["LOOP_A".into(), "LOOP_B".into(), "LOOP_A".into()]
            }
        );
    }

    #[test]
    fn unknown_set_is_undefined() {
        let defs = defs();
        let names = NameTable::register(&defs).unwrap();
        let mut sets = CharSetResolver::new(&names);
        let err = sets
            .resolve_parts(&[SetRef::named("NOPE")], "xyz.required")
            .unwrap_err();
        assert!(matches!(
            err,
            CompileError::UndefinedReference { kind: DefinitionKind::CharSet, ref name, .. } if name == "NOPE"
        ));
    }
}
