//! Translit resolution: evaluate compose/merge/reverse bodies into flat
//! tables, in the literal operand order given by the definition.

use super::names::NameTable;
use crate::config::{Config, GENERIC_LOWERCASE};
use crate::definition::{TranslitBody, TranslitRef};
use crate::error::{CompileError, DefinitionKind};
use crate::translit::TranslitTable;
use std::collections::HashMap;
use tracing::debug;

pub(crate) struct TranslitResolver<'n, 'd> {
    names: &'n NameTable<'d>,
    config: &'n Config,
    generic: TranslitTable,
    memo: HashMap<&'d str, TranslitTable>,
    stack: Vec<&'d str>,
}

impl<'n, 'd> TranslitResolver<'n, 'd> {
    pub(crate) fn new(names: &'n NameTable<'d>, config: &'n Config) -> Self {
        let generic = TranslitTable::unicode_lowercase(config.lowercase_range.clone());
        debug!(
            target: "alphabet::compile",
            entries = generic.len(),
            "built generic lowercase table"
        );
        Self {
            names,
            config,
            generic,
            memo: HashMap::new(),
            stack: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn generic(&self) -> &TranslitTable {
        &self.generic
    }

    pub(crate) fn resolve_named(
        &mut self,
        name: &str,
        referrer: &str,
    ) -> Result<TranslitTable, CompileError> {
        if name == GENERIC_LOWERCASE {
            return Ok(self.generic.clone());
        }
        let def = *self
            .names
            .translits
            .get(name)
            .ok_or_else(|| CompileError::undefined(DefinitionKind::Translit, name, referrer))?;
        if let Some(table) = self.memo.get(def.name.as_str()) {
            return Ok(table.clone());
        }
        if let Some(pos) = self.stack.iter().position(|n| *n == def.name) {
            let mut path: Vec<String> = self.stack[pos..].iter().map(|n| n.to_string()).collect();
            path.push(def.name.clone());
            return Err(CompileError::CyclicReference { path });
        }

        self.stack.push(&def.name);
        let evaluated = self.evaluate(&def.body, &def.name);
        self.stack.pop();

        let table = evaluated?;
        self.memo.insert(&def.name, table.clone());
        Ok(table)
    }

    /// Returns the emission name together with the table.
    pub(crate) fn resolve_ref(
        &mut self,
        table: &TranslitRef,
        referrer: &str,
    ) -> Result<(String, TranslitTable), CompileError> {
        match table {
            TranslitRef::Named(name) => Ok((name.clone(), self.resolve_named(name, referrer)?)),
            TranslitRef::Inline(table) => Ok((referrer.to_owned(), table.clone())),
        }
    }

    fn evaluate(&mut self, body: &TranslitBody, owner: &str) -> Result<TranslitTable, CompileError> {
        match body {
            TranslitBody::Literal(table) => Ok(table.clone()),
            TranslitBody::Compose(operands) => {
                self.fold(operands, owner, |acc, next| acc.compose(next))
            }
            TranslitBody::Merge(operands) => self.fold(operands, owner, |acc, next| acc.merge(next)),
            TranslitBody::Reverse(operand) => Ok(self.resolve_ref(operand, owner)?.1.reverse()),
            TranslitBody::UnicodeLowercase => Ok(TranslitTable::unicode_lowercase(
                self.config.lowercase_range.clone(),
            )),
        }
    }

    fn fold(
        &mut self,
        operands: &[TranslitRef],
        owner: &str,
        op: impl Fn(&TranslitTable, &TranslitTable) -> TranslitTable,
    ) -> Result<TranslitTable, CompileError> {
        let (first, rest) = operands
            .split_first()
            .ok_or_else(|| CompileError::malformed(owner, "composition needs at least one operand"))?;
        let mut acc = self.resolve_ref(first, owner)?.1;
        for operand in rest {
            let next = self.resolve_ref(operand, owner)?.1;
            acc = op(&acc, &next);
        }
        Ok(acc)
    }
}
