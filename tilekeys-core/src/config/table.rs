use std::collections::HashMap;

use super::keybind::Keybind;
use super::modifier::Modifiers;

/// Every binding handed to the window manager: the explicit ones followed by
/// the ones derived from the groups. Built once per load and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindingTable {
    bindings: Vec<Keybind>,
    explicit: usize,
}

/// One key combination bound more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub combo: String,
    /// Positions in the table, in order. The last one is the one that wins.
    pub positions: Vec<usize>,
    pub descriptions: Vec<Option<String>>,
}

impl BindingTable {
    #[must_use]
    pub fn new(explicit: Vec<Keybind>, derived: Vec<Keybind>) -> Self {
        let count = explicit.len();
        let mut bindings = explicit;
        bindings.extend(derived);
        Self {
            bindings,
            explicit: count,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keybind> {
        self.bindings.iter()
    }

    #[must_use]
    pub fn explicit(&self) -> &[Keybind] {
        &self.bindings[..self.explicit]
    }

    #[must_use]
    pub fn derived(&self) -> &[Keybind] {
        &self.bindings[self.explicit..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[must_use]
    pub fn into_bindings(self) -> Vec<Keybind> {
        self.bindings
    }

    /// The binding a key press resolves to. A later binding for the same
    /// combination shadows an earlier one.
    #[must_use]
    pub fn lookup(&self, modifier: &Modifiers, key: &str) -> Option<&Keybind> {
        self.bindings
            .iter()
            .rev()
            .find(|kb| kb.matches(modifier, key))
    }

    /// Combinations bound more than once, in order of first appearance.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut positions: HashMap<(&Modifiers, &str), Vec<usize>> = HashMap::new();
        let mut order = Vec::new();
        for (i, kb) in self.bindings.iter().enumerate() {
            let slot = positions.entry((&kb.modifier, kb.key.as_str())).or_default();
            if slot.is_empty() {
                order.push((&kb.modifier, kb.key.as_str()));
            }
            slot.push(i);
        }

        order
            .into_iter()
            .filter_map(|combo| {
                let found = positions.remove(&combo)?;
                (found.len() > 1).then(|| Conflict {
                    combo: self.bindings[found[0]].combo(),
                    descriptions: found
                        .iter()
                        .map(|&i| self.bindings[i].desc.clone())
                        .collect(),
                    positions: found,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a BindingTable {
    type Item = &'a Keybind;
    type IntoIter = std::slice::Iter<'a, Keybind>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
