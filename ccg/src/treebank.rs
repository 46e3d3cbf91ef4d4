//  Library for inspecting CCG derivations.
// Copyright (C) 2018 to 2019 Charles Johnson
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use crate::{
    auto,
    errors::{CcgError, CcgResult},
    grammar::Grammar,
    tree::DerivationTree,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTree {
    pub name: String,
    pub tree: DerivationTree,
}

/// The derivations of a batch file that parsed, and why the others didn't.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Treebank {
    pub trees: Vec<NamedTree>,
    pub rejected: Vec<(String, CcgError)>,
}

impl Treebank {
    pub fn load(text: &str) -> Self {
        let mut treebank = Self::default();
        for (name, parsed) in auto::parse_batch(text) {
            match parsed {
                Ok(tree) => treebank.trees.push(NamedTree {
                    name,
                    tree,
                }),
                Err(error) => treebank.rejected.push((name, error)),
            }
        }
        treebank
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Renders the batch, refusing to when a derivation has a node with more
    /// than two children.
    pub fn save(&self) -> CcgResult<String> {
        if let Some((position, named)) =
            self.trees.iter().enumerate().find(|(_, named)| !named.tree.is_well_formed())
        {
            return Err(CcgError::IllFormedDerivation {
                position: position + 1,
                name: named.name.clone(),
            });
        }
        Ok(auto::stringify_batch(
            self.trees.iter().map(|named| (named.name.as_str(), &named.tree)),
        ))
    }

    /// Diagnostics for every derivation, in batch order.
    pub fn check(&self, grammar: &Grammar) -> Vec<(String, Vec<String>)> {
        self.trees
            .par_iter()
            .map(|named| (named.name.clone(), grammar.check(&named.tree)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Treebank;
    use crate::{errors::CcgError, grammar::Grammar, tree::Node};

    const BATCH: &str = "ok\n(<T N 0 2> (<L N/N XX XX Black N/N>) (<L N XX XX Monday N>) )\n\
                         bad\n(<T N 0 2> (<L N/N XX XX Black N/N>) )\n\
                         wrong\n(<T NP 0 2> (<L N/N XX XX Black N/N>) (<L N XX XX Monday N>) )\n";

    #[test]
    fn load_sets_aside_bad_lines() {
        let treebank = Treebank::load(BATCH);
        assert_eq!(treebank.len(), 2);
        assert_eq!(treebank.rejected.len(), 1);
        assert_eq!(treebank.rejected[0].0, "bad");
    }

    #[test]
    fn check_per_derivation() {
        let treebank = Treebank::load(BATCH);
        let report = treebank.check(&Grammar::english());
        assert_eq!(report[0], ("ok".to_string(), vec![]));
        assert_eq!(report[1].0, "wrong");
        assert_eq!(report[1].1, vec!["No rule combining N/N and N into NP".to_string()]);
    }

    #[test]
    fn save_refuses_ill_formed_derivations() {
        let mut treebank = Treebank::load(BATCH);
        assert!(treebank.save().unwrap().starts_with("ok\n(<T N 0 2>"));
        let root = &mut treebank.trees[1].tree.root;
        root.push_child(Node::terminal(".", ".", ".", ".", 2));
        assert_eq!(
            treebank.save(),
            Err(CcgError::IllFormedDerivation {
                position: 2,
                name: "wrong".into()
            })
        );
    }
}
