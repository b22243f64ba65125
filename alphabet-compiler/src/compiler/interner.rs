use std::collections::HashMap;
use std::hash::Hash;

/// Value-keyed table store: equal contents share one index, and indices are
/// handed out in first-seen order. The first name wins.
pub(crate) struct Interner<T> {
    items: Vec<(String, T)>,
    index: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> Interner<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn intern(&mut self, name: &str, item: T) -> usize {
        if let Some(&idx) = self.index.get(&item) {
            return idx;
        }
        let idx = self.items.len();
        self.index.insert(item.clone(), idx);
        self.items.push((name.to_owned(), item));
        idx
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &T {
        &self.items[idx].1
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn into_items(self) -> Vec<(String, T)> {
        self.items
    }
}
