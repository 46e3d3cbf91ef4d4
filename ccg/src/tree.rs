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

use crate::grammar::Grammar;
use std::ptr;

/// A word of the sentence with its lexical category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terminal {
    pub category: String,
    pub tag1: String,
    pub tag2: String,
    pub word: String,
    /// Position among the terminals of the tree, counted from the left.
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonTerminal {
    pub category: String,
    pub children: Vec<Node>,
}

/// A node of a derivation. Categories are kept as written and only parsed
/// when the derivation is checked.
///
/// Cloning makes a fully independent deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Node {
    pub fn terminal(
        category: impl Into<String>,
        tag1: impl Into<String>,
        tag2: impl Into<String>,
        word: impl Into<String>,
        index: usize,
    ) -> Self {
        Self::Terminal(Terminal {
            category: category.into(),
            tag1: tag1.into(),
            tag2: tag2.into(),
            word: word.into(),
            index,
        })
    }

    pub fn non_terminal(category: impl Into<String>, children: Vec<Self>) -> Self {
        Self::NonTerminal(NonTerminal {
            category: category.into(),
            children,
        })
    }

    pub fn category(&self) -> &str {
        match self {
            Self::Terminal(terminal) => &terminal.category,
            Self::NonTerminal(non_terminal) => &non_terminal.category,
        }
    }

    /// Retags the node.
    pub fn set_category(&mut self, category: impl Into<String>) {
        match self {
            Self::Terminal(terminal) => terminal.category = category.into(),
            Self::NonTerminal(non_terminal) => non_terminal.category = category.into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }

    pub fn children(&self) -> &[Self] {
        match self {
            Self::Terminal(_) => &[],
            Self::NonTerminal(non_terminal) => &non_terminal.children,
        }
    }

    /// Visits this node and then its descendants in pre-order.
    pub fn each<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        f(self);
        for child in self.children() {
            child.each(f);
        }
    }

    pub fn nodes(&self) -> Vec<&Self> {
        let mut nodes = vec![];
        self.each(&mut |node| nodes.push(node));
        nodes
    }

    /// The terminals below this node from left to right.
    pub fn leaves(&self) -> Vec<&Terminal> {
        let mut leaves = vec![];
        self.each(&mut |node| {
            if let Self::Terminal(terminal) = node {
                leaves.push(terminal)
            }
        });
        leaves
    }

    /// Follows first children down to a terminal, if there is one.
    pub fn left_most_leaf(&self) -> Option<&Terminal> {
        match self {
            Self::Terminal(terminal) => Some(terminal),
            Self::NonTerminal(non_terminal) => {
                non_terminal.children.first().and_then(Self::left_most_leaf)
            },
        }
    }

    /// Whether `target` is this very node or one of its descendants.
    pub fn contains(&self, target: &Self) -> bool {
        ptr::eq(self, target) || self.children().iter().any(|child| child.contains(target))
    }

    /// Appends a child to a non-terminal. Terminals refuse it.
    pub fn push_child(&mut self, child: Self) -> bool {
        match self {
            Self::Terminal(_) => false,
            Self::NonTerminal(non_terminal) => {
                non_terminal.children.push(child);
                true
            },
        }
    }

    pub fn remove_child(&mut self, index: usize) -> Option<Self> {
        match self {
            Self::NonTerminal(non_terminal) if index < non_terminal.children.len() => {
                Some(non_terminal.children.remove(index))
            },
            _ => None,
        }
    }

    /// Adds `children` and restores the realization order of all the children,
    /// the order of the left-most terminal below each of them.
    pub fn attach_children(&mut self, children: Vec<Self>) -> bool {
        match self {
            Self::Terminal(_) => false,
            Self::NonTerminal(non_terminal) => {
                non_terminal.children.extend(children);
                non_terminal
                    .children
                    .sort_by_key(|child| child.left_most_leaf().map_or(usize::MAX, |leaf| leaf.index));
                true
            },
        }
    }
}

/// A whole derivation of a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationTree {
    pub root: Node,
}

impl DerivationTree {
    pub fn new(root: Node) -> Self {
        Self {
            root,
        }
    }

    pub fn each<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        self.root.each(f)
    }

    pub fn nodes(&self) -> Vec<&Node> {
        self.root.nodes()
    }

    pub fn leaves(&self) -> Vec<&Terminal> {
        self.root.leaves()
    }

    pub fn words(&self) -> Vec<&str> {
        self.leaves().into_iter().map(|leaf| leaf.word.as_str()).collect()
    }

    /// Whether no non-terminal has more than two children.
    pub fn is_well_formed(&self) -> bool {
        self.nodes().iter().all(|node| node.children().len() <= 2)
    }

    /// Diagnostics for every node that `grammar` doesn't license.
    pub fn check(&self, grammar: &Grammar) -> Vec<String> {
        grammar.check(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{DerivationTree, Node};

    fn leaf(category: &str, word: &str, index: usize) -> Node {
        Node::terminal(category, "XX", "XX", word, index)
    }

    fn black_monday() -> DerivationTree {
        DerivationTree::new(Node::non_terminal(
            "NP",
            vec![Node::non_terminal(
                "N",
                vec![leaf("N/N", "Black", 0), leaf("N", "Monday", 1)],
            )],
        ))
    }

    #[test]
    fn pre_order_traversal() {
        let tree = black_monday();
        let categories: Vec<&str> = tree.nodes().iter().map(|node| node.category()).collect();
        assert_eq!(categories, vec!["NP", "N", "N/N", "N"]);
        assert_eq!(tree.words(), vec!["Black", "Monday"]);
    }

    #[test]
    fn contains_is_by_identity() {
        let tree = black_monday();
        let copy = tree.clone();
        let monday = &tree.root.children()[0].children()[1];
        assert!(tree.root.contains(monday));
        assert!(!copy.root.contains(monday));
        assert!(!monday.contains(&tree.root));
    }

    #[test]
    fn clones_are_independent() {
        let tree = black_monday();
        let mut copy = tree.clone();
        copy.root.set_category("S");
        assert_eq!(tree.root.category(), "NP");
    }

    #[test]
    fn attaching_restores_realization_order() {
        let mut tree = black_monday();
        let mut n = tree.root.remove_child(0).unwrap();
        let black = n.remove_child(0).unwrap();
        let monday = n.remove_child(0).unwrap();
        assert!(tree.root.attach_children(vec![monday, black]));
        assert_eq!(tree.words(), vec!["Black", "Monday"]);
        assert_eq!(tree.root.left_most_leaf().map(|leaf| leaf.index), Some(0));
    }

    #[test]
    fn terminals_take_no_children() {
        let mut terminal = leaf("N", "Monday", 0);
        assert!(!terminal.push_child(leaf("N", "Tuesday", 1)));
        assert_eq!(terminal.remove_child(0), None);
    }

    #[test]
    fn arity() {
        let mut tree = black_monday();
        assert!(tree.is_well_formed());
        tree.root.push_child(leaf(".", ".", 2));
        tree.root.push_child(leaf(".", ".", 3));
        assert!(!tree.is_well_formed());
    }
}
