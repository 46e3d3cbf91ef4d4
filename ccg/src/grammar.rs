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
    category::Category,
    combinators::{self, Combinator},
    errors::{CcgError, CcgResult},
    tree::{DerivationTree, Node},
};
use log::debug;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::{fmt, str::FromStr};

/// The languages with a built-in rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Japanese,
}

impl FromStr for Language {
    type Err = CcgError;

    fn from_str(name: &str) -> CcgResult<Self> {
        match name.to_lowercase().as_str() {
            "english" => Ok(Self::English),
            "japanese" => Ok(Self::Japanese),
            _ => Err(CcgError::UnknownGrammar {
                name: name.into(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::English => "English",
            Self::Japanese => "Japanese",
        })
    }
}

/// A combinator together with the name it is reported under.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub combine: Combinator,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn rule(name: &'static str, combine: Combinator) -> Rule {
    Rule {
        name,
        combine,
    }
}

fn english_rules() -> Vec<Rule> {
    vec![
        rule("forward application", combinators::forward_application),
        rule("backward application", combinators::english_backward_application),
        rule("forward composition", combinators::forward_composition),
        rule("backward composition", combinators::backward_composition),
        rule("generalized forward composition", combinators::generalized_forward_composition),
        rule("generalized backward composition", combinators::generalized_backward_composition),
        rule("conjunction", combinators::conjunction),
        rule("punctuation elision", combinators::remove_punctuation),
        rule("comma adverbial", combinators::comma_vp_to_adverbial),
        rule("comma parenthetical", combinators::parenthetical_direct_speech),
    ]
}

fn japanese_rules() -> Vec<Rule> {
    vec![
        rule("forward application", combinators::forward_application),
        rule("backward application", combinators::backward_application),
        rule("forward composition", combinators::forward_composition),
        rule("backward composition", combinators::backward_composition),
        rule("generalized backward composition", combinators::generalized_backward_composition),
        rule("generalized backward composition 2", combinators::generalized_backward_composition2),
        rule("generalized backward composition 3", combinators::generalized_backward_composition3),
        rule("crossed forward composition", combinators::crossed_forward_composition),
        rule("crossed forward composition 1", combinators::crossed_forward_composition1),
        rule("crossed forward composition 2", combinators::crossed_forward_composition2),
        rule("conjoin", combinators::conjoin),
    ]
}

/// An ordered, immutable set of rules that decides which binary nodes of a
/// derivation are licensed.
#[derive(Clone, Debug)]
pub struct Grammar {
    language: Language,
    rules: Vec<Rule>,
}

impl From<Language> for Grammar {
    fn from(language: Language) -> Self {
        let rules = match language {
            Language::English => english_rules(),
            Language::Japanese => japanese_rules(),
        };
        Self {
            language,
            rules,
        }
    }
}

impl Grammar {
    pub fn english() -> Self {
        Language::English.into()
    }

    pub fn japanese() -> Self {
        Language::Japanese.into()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every result of every rule for the pair, tagged with the rule's name.
    pub fn derive(&self, left: &Category, right: &Category) -> Vec<(&'static str, Category)> {
        self.rules
            .iter()
            .flat_map(|rule| {
                (rule.combine)(left, right)
                    .into_iter()
                    .map(move |result| (rule.name, result))
            })
            .collect()
    }

    /// Whether some rule combines `left` and `right` into a category matching `parent`.
    pub fn licenses(&self, left: &Category, right: &Category, parent: &Category) -> bool {
        self.rules
            .iter()
            .any(|rule| (rule.combine)(left, right).iter().any(|result| result.matches(parent)))
    }

    /// One diagnostic per unlicensed node, in pre-order. Empty when the whole
    /// derivation is licensed.
    pub fn check(&self, tree: &DerivationTree) -> Vec<String> {
        debug!("check({} nodes)", tree.nodes().len());
        tree.nodes()
            .into_iter()
            .filter_map(|node| self.check_node(node))
            .collect()
    }

    /// Same diagnostics in the same order as [`Grammar::check`], with the nodes
    /// checked on the rayon thread pool.
    pub fn par_check(&self, tree: &DerivationTree) -> Vec<String> {
        tree.nodes()
            .par_iter()
            .filter_map(|node| self.check_node(node))
            .collect()
    }

    fn check_node(&self, node: &Node) -> Option<String> {
        match node.children() {
            [left, right] => {
                let (left, right, parent) = (left.category(), right.category(), node.category());
                let (left_cat, right_cat, parent_cat) = match parse_categories(left, right, parent) {
                    Ok(categories) => categories,
                    Err(error) => return Some(format!("Cannot parse category: {}", error)),
                };
                if self.licenses(&left_cat, &right_cat, &parent_cat) {
                    None
                } else {
                    debug!("{} {} -/-> {}", left_cat, right_cat, parent_cat);
                    Some(format!("No rule combining {} and {} into {}", left, right, parent))
                }
            },
            children if children.len() > 2 => {
                Some("There is a node with more than two children".into())
            },
            _ => None,
        }
    }
}

fn parse_categories(
    left: &str,
    right: &str,
    parent: &str,
) -> CcgResult<(Category, Category, Category)> {
    Ok((left.parse()?, right.parse()?, parent.parse()?))
}
